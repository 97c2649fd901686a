//! Register Doctor Use Case
//!
//! Creates a new doctor record.

use std::sync::Arc;

use kernel::id::{RecordKind, markers};

use crate::domain::entity::doctor::Doctor;
use crate::domain::repository::DoctorRepository;
use crate::domain::validation::DoctorForm;
use crate::error::{ClinicError, ClinicResult};

/// Register doctor use case
pub struct RegisterDoctorUseCase<R>
where
    R: DoctorRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterDoctorUseCase<R>
where
    R: DoctorRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, form: DoctorForm) -> ClinicResult<()> {
        // Taken ids are reported before any field is looked at
        if self.repo.exists(&form.doctor_id).await? {
            return Err(ClinicError::AlreadyExists {
                kind: markers::Doctor::LABEL,
                id: form.doctor_id,
            });
        }

        let fields = form.validate()?;
        let doctor = Doctor::register(fields);

        self.repo.create(&doctor).await?;

        tracing::info!(doctor_id = %doctor.doctor_id, "Doctor registered");

        Ok(())
    }
}
