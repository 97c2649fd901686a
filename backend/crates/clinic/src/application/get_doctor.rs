//! Get Doctor Use Case

use std::sync::Arc;

use kernel::id::{RecordKind, markers};

use crate::domain::entity::doctor::Doctor;
use crate::domain::repository::DoctorRepository;
use crate::error::{ClinicError, ClinicResult};

/// Get doctor use case
pub struct GetDoctorUseCase<R>
where
    R: DoctorRepository,
{
    repo: Arc<R>,
}

impl<R> GetDoctorUseCase<R>
where
    R: DoctorRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, doctor_id: &str) -> ClinicResult<Doctor> {
        self.repo
            .find(doctor_id)
            .await?
            .ok_or_else(|| ClinicError::NotFound {
                kind: markers::Doctor::LABEL,
                id: doctor_id.to_string(),
            })
    }
}
