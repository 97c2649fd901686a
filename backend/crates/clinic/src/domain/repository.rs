//! Repository Traits
//!
//! Interfaces for record persistence. Implementation is in infrastructure
//! layer. Lookups take the raw id string: an id that could never have been
//! registered is simply not found.

use crate::domain::entity::{doctor::Doctor, patient::Patient};
use crate::error::ClinicResult;

/// Doctor repository trait
#[trait_variant::make(DoctorRepository: Send)]
pub trait LocalDoctorRepository {
    /// Check if a doctor is registered under this id
    async fn exists(&self, doctor_id: &str) -> ClinicResult<bool>;

    /// Find doctor by id
    async fn find(&self, doctor_id: &str) -> ClinicResult<Option<Doctor>>;

    /// Store a new doctor; fails with `AlreadyExists` if the id is taken
    async fn create(&self, doctor: &Doctor) -> ClinicResult<()>;
}

/// Patient repository trait
#[trait_variant::make(PatientRepository: Send)]
pub trait LocalPatientRepository {
    /// Check if a patient is registered under this id
    async fn exists(&self, patient_id: &str) -> ClinicResult<bool>;

    /// Find patient by id
    async fn find(&self, patient_id: &str) -> ClinicResult<Option<Patient>>;

    /// Store a new patient; fails with `AlreadyExists` if the id is taken
    async fn create(&self, patient: &Patient) -> ClinicResult<()>;

    /// Overwrite the full record of an existing patient
    async fn update(&self, patient: &Patient) -> ClinicResult<()>;
}
