//! Visit Value Entity
//!
//! One patient/doctor encounter. Immutable once built: fields are only
//! readable, and a visit is never edited after it is appended.

use crate::domain::validation::FieldError;
use crate::domain::value_object::required_text::RequiredText;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    doctor_id: RequiredText,
    visit_date: RequiredText,
    symptoms: RequiredText,
    diagnosis: RequiredText,
}

impl Visit {
    /// Build a visit; every field must be non-empty.
    ///
    /// The doctor id is recorded as given: it is not checked against the
    /// doctor registry, and the date is free text.
    pub fn new(
        doctor_id: impl Into<String>,
        visit_date: impl Into<String>,
        symptoms: impl Into<String>,
        diagnosis: impl Into<String>,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            doctor_id: RequiredText::new("doctorId", doctor_id)?,
            visit_date: RequiredText::new("visitDate", visit_date)?,
            symptoms: RequiredText::new("symptoms", symptoms)?,
            diagnosis: RequiredText::new("diagnosis", diagnosis)?,
        })
    }

    /// Create from a stored record (assumed already validated)
    pub fn from_stored(
        doctor_id: String,
        visit_date: String,
        symptoms: String,
        diagnosis: String,
    ) -> Self {
        Self {
            doctor_id: RequiredText::from_stored(doctor_id),
            visit_date: RequiredText::from_stored(visit_date),
            symptoms: RequiredText::from_stored(symptoms),
            diagnosis: RequiredText::from_stored(diagnosis),
        }
    }

    pub fn doctor_id(&self) -> &str {
        self.doctor_id.as_str()
    }

    pub fn visit_date(&self) -> &str {
        self.visit_date.as_str()
    }

    pub fn symptoms(&self) -> &str {
        self.symptoms.as_str()
    }

    pub fn diagnosis(&self) -> &str {
        self.diagnosis.as_str()
    }
}
