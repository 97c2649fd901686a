//! Register Patient Use Case
//!
//! Creates a new patient record with an empty visit history.

use std::sync::Arc;

use kernel::id::{RecordKind, markers};

use crate::domain::entity::patient::Patient;
use crate::domain::repository::PatientRepository;
use crate::domain::validation::PatientForm;
use crate::error::{ClinicError, ClinicResult};

/// Register patient use case
pub struct RegisterPatientUseCase<R>
where
    R: PatientRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterPatientUseCase<R>
where
    R: PatientRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, form: PatientForm) -> ClinicResult<()> {
        if self.repo.exists(&form.patient_id).await? {
            return Err(ClinicError::AlreadyExists {
                kind: markers::Patient::LABEL,
                id: form.patient_id,
            });
        }

        let fields = form.validate()?;
        let patient = Patient::register(fields);

        self.repo.create(&patient).await?;

        tracing::info!(patient_id = %patient.patient_id, "Patient registered");

        Ok(())
    }
}
