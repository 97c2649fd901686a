//! Field Validator
//!
//! Pure, ordered rule checks over the raw values of a registration.
//! Rules run in a fixed order and the first failure is the one reported:
//!
//! 1. no required field is empty
//! 2. the id is letters and digits only
//! 3. names are letters only
//! 4. age is strictly between 0 and 150
//! 5. phone-type fields are exactly ten digits
//! 6. blood group (patients only) is letters and digits, optional Rh sign
//!
//! A successful check hands back the typed values, so a record can only be
//! built from input that went through here.

use kernel::id::{DoctorId, IdError, PatientId};
use thiserror::Error;

use crate::domain::value_object::{
    age::Age, blood_group::BloodGroup, password::RawPassword, person_name::PersonName,
    phone_number::PhoneNumber, required_text::RequiredText,
};

// ============================================================================
// Errors
// ============================================================================

/// The first rule a candidate value broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} may only contain letters and digits (found '{found}')")]
    NotAlphanumeric { field: &'static str, found: char },

    #[error("{field} may only contain letters (found '{found}')")]
    NotAlphabetic { field: &'static str, found: char },

    #[error("age must be between 1 and 149 (got {age})")]
    AgeOutOfRange { age: i64 },

    #[error("age must be a whole number (got '{raw}')")]
    AgeNotANumber { raw: String },

    #[error("{field} must be exactly 10 digits")]
    NotTenDigits { field: &'static str },
}

impl FieldError {
    /// Name of the offending field as it appears on the wire.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Empty { field }
            | FieldError::NotAlphanumeric { field, .. }
            | FieldError::NotAlphabetic { field, .. }
            | FieldError::NotTenDigits { field } => *field,
            FieldError::AgeOutOfRange { .. } | FieldError::AgeNotANumber { .. } => "age",
        }
    }

    fn from_id(field: &'static str, err: IdError) -> Self {
        match err {
            IdError::Empty => FieldError::Empty { field },
            IdError::InvalidCharacter { found, .. } => FieldError::NotAlphanumeric { field, found },
        }
    }
}

/// Rule 1: report the first empty field, in declaration order.
fn ensure_present(fields: &[(&'static str, &str)]) -> Result<(), FieldError> {
    match fields.iter().find(|(_, value)| value.is_empty()) {
        Some((field, _)) => Err(FieldError::Empty { field: *field }),
        None => Ok(()),
    }
}

// ============================================================================
// Doctor
// ============================================================================

/// Raw candidate values for a doctor registration.
pub struct DoctorForm {
    pub doctor_id: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub age: i64,
    pub phone_number: String,
}

/// Doctor fields that passed every rule.
#[derive(Debug)]
pub struct ValidDoctor {
    pub doctor_id: DoctorId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub password: RawPassword,
    pub age: Age,
    pub phone_number: PhoneNumber,
}

impl DoctorForm {
    pub fn validate(self) -> Result<ValidDoctor, FieldError> {
        ensure_present(&[
            ("doctorId", self.doctor_id.as_str()),
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("password", self.password.as_str()),
            ("phoneNumber", self.phone_number.as_str()),
        ])?;

        let doctor_id =
            DoctorId::parse(self.doctor_id).map_err(|e| FieldError::from_id("doctorId", e))?;
        let first_name = PersonName::new("firstName", self.first_name)?;
        let last_name = PersonName::new("lastName", self.last_name)?;
        let age = Age::new(self.age)?;
        let phone_number = PhoneNumber::new("phoneNumber", self.phone_number)?;
        let password = RawPassword::new(self.password)?;

        Ok(ValidDoctor {
            doctor_id,
            first_name,
            last_name,
            password,
            age,
            phone_number,
        })
    }
}

// ============================================================================
// Patient
// ============================================================================

/// Raw candidate values for a patient registration.
pub struct PatientForm {
    pub patient_id: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub age: i64,
    pub phone_number: String,
    pub emergency_phone_number: String,
    pub address: String,
    pub blood_group: String,
}

/// Patient fields that passed every rule.
#[derive(Debug)]
pub struct ValidPatient {
    pub patient_id: PatientId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub password: RawPassword,
    pub age: Age,
    pub phone_number: PhoneNumber,
    pub emergency_phone_number: PhoneNumber,
    pub address: RequiredText,
    pub blood_group: BloodGroup,
}

impl PatientForm {
    pub fn validate(self) -> Result<ValidPatient, FieldError> {
        ensure_present(&[
            ("patientId", self.patient_id.as_str()),
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("password", self.password.as_str()),
            ("phoneNumber", self.phone_number.as_str()),
            ("emergencyPhoneNumber", self.emergency_phone_number.as_str()),
            ("address", self.address.as_str()),
            ("bloodGroup", self.blood_group.as_str()),
        ])?;

        let patient_id =
            PatientId::parse(self.patient_id).map_err(|e| FieldError::from_id("patientId", e))?;
        let first_name = PersonName::new("firstName", self.first_name)?;
        let last_name = PersonName::new("lastName", self.last_name)?;
        let age = Age::new(self.age)?;
        let phone_number = PhoneNumber::new("phoneNumber", self.phone_number)?;
        let emergency_phone_number =
            PhoneNumber::new("emergencyPhoneNumber", self.emergency_phone_number)?;
        let blood_group = BloodGroup::new(self.blood_group)?;
        let address = RequiredText::new("address", self.address)?;
        let password = RawPassword::new(self.password)?;

        Ok(ValidPatient {
            patient_id,
            first_name,
            last_name,
            password,
            age,
            phone_number,
            emergency_phone_number,
            address,
            blood_group,
        })
    }
}
