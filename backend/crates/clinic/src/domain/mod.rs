//! Domain Layer
//!
//! Contains entities, value objects, the field validator, and the storage
//! traits the rest of the crate is written against.

pub mod entity;
pub mod ledger;
pub mod repository;
pub mod validation;
pub mod value_object;

// Re-exports
pub use entity::{doctor::Doctor, patient::Patient, visit::Visit};
pub use ledger::{Ledger, LedgerError, WriteMode, WriteOp};
pub use repository::{DoctorRepository, PatientRepository};
pub use validation::{DoctorForm, FieldError, PatientForm};
