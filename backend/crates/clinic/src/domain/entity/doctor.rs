//! Doctor Entity
//!
//! Identity record of a doctor. Created once at registration and read-only
//! afterwards.

use crate::domain::validation::ValidDoctor;
use crate::domain::value_object::{
    DoctorId, age::Age, password::PasswordHash, person_name::PersonName,
    phone_number::PhoneNumber,
};

/// Doctor entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    /// Caller-chosen unique id (storage key)
    pub doctor_id: DoctorId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    /// Digest of the password given at registration
    pub password: PasswordHash,
    pub age: Age,
    pub phone_number: PhoneNumber,
    /// Present in stored records but never written by any operation.
    pub associated_patients: Vec<String>,
}

impl Doctor {
    /// Build a new doctor from validated fields, digesting the password.
    pub fn register(fields: ValidDoctor) -> Self {
        let password = PasswordHash::from_raw(&fields.password);

        Self {
            doctor_id: fields.doctor_id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            password,
            age: fields.age,
            phone_number: fields.phone_number,
            associated_patients: Vec::new(),
        }
    }
}
