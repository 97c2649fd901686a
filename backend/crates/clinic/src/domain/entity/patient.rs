//! Patient Entity
//!
//! Identity record of a patient plus its visit history. Identity fields
//! are fixed at registration; the visit list only ever grows.

use crate::domain::entity::visit::Visit;
use crate::domain::validation::ValidPatient;
use crate::domain::value_object::{
    PatientId, age::Age, blood_group::BloodGroup, password::PasswordHash,
    person_name::PersonName, phone_number::PhoneNumber, required_text::RequiredText,
};

/// Patient entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    /// Caller-chosen unique id (storage key)
    pub patient_id: PatientId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    /// Digest of the password given at registration
    pub password: PasswordHash,
    pub age: Age,
    pub phone_number: PhoneNumber,
    pub emergency_phone_number: PhoneNumber,
    pub address: RequiredText,
    pub blood_group: BloodGroup,
    /// Free text, never set by registration
    pub allergies: Option<String>,
    /// Append-only, in the order visits were recorded
    pub(crate) visits: Vec<Visit>,
}

impl Patient {
    /// Build a new patient from validated fields, digesting the password.
    /// The visit history starts empty.
    pub fn register(fields: ValidPatient) -> Self {
        let password = PasswordHash::from_raw(&fields.password);

        Self {
            patient_id: fields.patient_id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            password,
            age: fields.age,
            phone_number: fields.phone_number,
            emergency_phone_number: fields.emergency_phone_number,
            address: fields.address,
            blood_group: fields.blood_group,
            allergies: None,
            visits: Vec::new(),
        }
    }

    /// Recorded visits, oldest first.
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Append a visit after every existing one.
    pub fn record_visit(&mut self, visit: Visit) {
        self.visits.push(visit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::PatientForm;

    fn registered() -> Patient {
        let form = PatientForm {
            patient_id: "P1".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            password: "secret".to_string(),
            age: 30,
            phone_number: "1234567890".to_string(),
            emergency_phone_number: "0987654321".to_string(),
            address: "221B Baker St".to_string(),
            blood_group: "O+".to_string(),
        };
        Patient::register(form.validate().unwrap())
    }

    #[test]
    fn test_register_starts_without_visits_or_allergies() {
        let patient = registered();
        assert!(patient.visits().is_empty());
        assert!(patient.allergies.is_none());
        assert_eq!(
            patient.password.as_hex(),
            "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b"
        );
    }

    #[test]
    fn test_visits_keep_insertion_order_and_duplicates() {
        let mut patient = registered();
        let first = Visit::new("D1", "2024-01-01", "fever", "flu").unwrap();
        let second = Visit::new("D2", "2024-01-05", "cough", "cold").unwrap();

        patient.record_visit(first.clone());
        patient.record_visit(second.clone());
        patient.record_visit(first.clone());

        assert_eq!(patient.visits(), &[first.clone(), second, first]);
    }
}
