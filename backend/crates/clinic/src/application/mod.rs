//! Application Layer
//!
//! Use cases and application configuration.

pub mod config;
pub mod get_doctor;
pub mod get_patient;
pub mod record_visit;
pub mod register_doctor;
pub mod register_patient;

// Re-exports
pub use config::ClinicConfig;
pub use get_doctor::GetDoctorUseCase;
pub use get_patient::GetPatientUseCase;
pub use record_visit::{RecordVisitInput, RecordVisitUseCase};
pub use register_doctor::RegisterDoctorUseCase;
pub use register_patient::RegisterPatientUseCase;
