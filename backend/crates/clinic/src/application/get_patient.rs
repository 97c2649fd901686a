//! Get Patient Use Case

use std::sync::Arc;

use kernel::id::{RecordKind, markers};

use crate::domain::entity::patient::Patient;
use crate::domain::repository::PatientRepository;
use crate::error::{ClinicError, ClinicResult};

/// Get patient use case
pub struct GetPatientUseCase<R>
where
    R: PatientRepository,
{
    repo: Arc<R>,
}

impl<R> GetPatientUseCase<R>
where
    R: PatientRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, patient_id: &str) -> ClinicResult<Patient> {
        self.repo
            .find(patient_id)
            .await?
            .ok_or_else(|| ClinicError::NotFound {
                kind: markers::Patient::LABEL,
                id: patient_id.to_string(),
            })
    }
}
