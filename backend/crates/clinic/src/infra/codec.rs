//! Entity Codec
//!
//! Stored JSON shape of each record. Field names match the records already
//! on the ledger, including the misspelled `PatiensAssociated` and the
//! lowercase `visitdate`. Collections written as `null` read back empty.
//!
//! Decoding trusts stored values: a record is rehydrated field by field
//! without re-running the validator.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entity::{doctor::Doctor, patient::Patient, visit::Visit};
use crate::domain::value_object::{
    DoctorId, PatientId, age::Age, blood_group::BloodGroup, password::PasswordHash,
    person_name::PersonName, phone_number::PhoneNumber, required_text::RequiredText,
};
use crate::error::ClinicResult;

/// Byte encoding of an entity as stored on the ledger.
pub trait RecordCodec: Sized {
    fn encode(&self) -> ClinicResult<Vec<u8>>;
    fn decode(bytes: &[u8]) -> ClinicResult<Self>;
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Doctor
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorRecord {
    #[serde(rename = "doctorId")]
    pub doctor_id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// Hex digest, never the clear-text secret
    pub password: String,
    pub age: i64,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(
        rename = "PatiensAssociated",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub patients_associated: Vec<String>,
}

impl From<&Doctor> for DoctorRecord {
    fn from(doctor: &Doctor) -> Self {
        Self {
            doctor_id: doctor.doctor_id.as_str().to_string(),
            first_name: doctor.first_name.as_str().to_string(),
            last_name: doctor.last_name.as_str().to_string(),
            password: doctor.password.as_hex().to_string(),
            age: doctor.age.years(),
            phone_number: doctor.phone_number.as_str().to_string(),
            patients_associated: doctor.associated_patients.clone(),
        }
    }
}

impl DoctorRecord {
    pub fn into_doctor(self) -> Doctor {
        Doctor {
            doctor_id: DoctorId::from_trusted(self.doctor_id),
            first_name: PersonName::from_stored(self.first_name),
            last_name: PersonName::from_stored(self.last_name),
            password: PasswordHash::from_stored(self.password),
            age: Age::from_stored(self.age),
            phone_number: PhoneNumber::from_stored(self.phone_number),
            associated_patients: self.patients_associated,
        }
    }
}

impl RecordCodec for Doctor {
    fn encode(&self) -> ClinicResult<Vec<u8>> {
        Ok(serde_json::to_vec(&DoctorRecord::from(self))?)
    }

    fn decode(bytes: &[u8]) -> ClinicResult<Self> {
        let record: DoctorRecord = serde_json::from_slice(bytes)?;
        Ok(record.into_doctor())
    }
}

// ============================================================================
// Visit
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRecord {
    #[serde(rename = "doctorId")]
    pub doctor_id: String,
    #[serde(rename = "visitdate")]
    pub visit_date: String,
    pub symptoms: String,
    pub diagnosis: String,
}

impl From<&Visit> for VisitRecord {
    fn from(visit: &Visit) -> Self {
        Self {
            doctor_id: visit.doctor_id().to_string(),
            visit_date: visit.visit_date().to_string(),
            symptoms: visit.symptoms().to_string(),
            diagnosis: visit.diagnosis().to_string(),
        }
    }
}

impl From<VisitRecord> for Visit {
    fn from(record: VisitRecord) -> Self {
        Visit::from_stored(
            record.doctor_id,
            record.visit_date,
            record.symptoms,
            record.diagnosis,
        )
    }
}

// ============================================================================
// Patient
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    #[serde(rename = "patientId")]
    pub patient_id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// Hex digest, never the clear-text secret
    pub password: String,
    pub age: i64,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(rename = "emergPhoneNumber")]
    pub emergency_phone_number: String,
    pub address: String,
    #[serde(rename = "bloodGroup")]
    pub blood_group: String,
    /// Empty string means none recorded
    #[serde(default)]
    pub allergies: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub visits: Vec<VisitRecord>,
}

impl From<&Patient> for PatientRecord {
    fn from(patient: &Patient) -> Self {
        Self {
            patient_id: patient.patient_id.as_str().to_string(),
            first_name: patient.first_name.as_str().to_string(),
            last_name: patient.last_name.as_str().to_string(),
            password: patient.password.as_hex().to_string(),
            age: patient.age.years(),
            phone_number: patient.phone_number.as_str().to_string(),
            emergency_phone_number: patient.emergency_phone_number.as_str().to_string(),
            address: patient.address.as_str().to_string(),
            blood_group: patient.blood_group.as_str().to_string(),
            allergies: patient.allergies.clone().unwrap_or_default(),
            visits: patient.visits().iter().map(VisitRecord::from).collect(),
        }
    }
}

impl PatientRecord {
    pub fn into_patient(self) -> Patient {
        Patient {
            patient_id: PatientId::from_trusted(self.patient_id),
            first_name: PersonName::from_stored(self.first_name),
            last_name: PersonName::from_stored(self.last_name),
            password: PasswordHash::from_stored(self.password),
            age: Age::from_stored(self.age),
            phone_number: PhoneNumber::from_stored(self.phone_number),
            emergency_phone_number: PhoneNumber::from_stored(self.emergency_phone_number),
            address: RequiredText::from_stored(self.address),
            blood_group: BloodGroup::from_stored(self.blood_group),
            allergies: Some(self.allergies).filter(|a| !a.is_empty()),
            visits: self.visits.into_iter().map(Visit::from).collect(),
        }
    }
}

impl RecordCodec for Patient {
    fn encode(&self) -> ClinicResult<Vec<u8>> {
        Ok(serde_json::to_vec(&PatientRecord::from(self))?)
    }

    fn decode(bytes: &[u8]) -> ClinicResult<Self> {
        let record: PatientRecord = serde_json::from_slice(bytes)?;
        Ok(record.into_patient())
    }
}
