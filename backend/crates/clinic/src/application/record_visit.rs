//! Record Visit Use Case
//!
//! Appends one visit to a patient's history and writes the whole record
//! back under the same id.

use std::sync::Arc;

use crate::application::get_patient::GetPatientUseCase;
use crate::domain::entity::visit::Visit;
use crate::domain::repository::PatientRepository;
use crate::domain::validation::FieldError;
use crate::error::ClinicResult;

/// Record visit input
pub struct RecordVisitInput {
    pub patient_id: String,
    pub doctor_id: String,
    pub visit_date: String,
    pub symptoms: String,
    pub diagnosis: String,
}

/// Record visit use case
pub struct RecordVisitUseCase<R>
where
    R: PatientRepository,
{
    repo: Arc<R>,
    get_patient: GetPatientUseCase<R>,
}

impl<R> RecordVisitUseCase<R>
where
    R: PatientRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            get_patient: GetPatientUseCase::new(Arc::clone(&repo)),
            repo,
        }
    }

    pub async fn execute(&self, input: RecordVisitInput) -> ClinicResult<()> {
        if input.patient_id.is_empty() {
            return Err(FieldError::Empty { field: "patientId" }.into());
        }
        let visit = Visit::new(
            input.doctor_id,
            input.visit_date,
            input.symptoms,
            input.diagnosis,
        )?;

        let mut patient = self.get_patient.execute(&input.patient_id).await?;
        patient.record_visit(visit);

        self.repo.update(&patient).await?;

        tracing::info!(
            patient_id = %patient.patient_id,
            visits = patient.visits().len(),
            "Visit recorded"
        );

        Ok(())
    }
}
