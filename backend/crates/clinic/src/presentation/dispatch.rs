//! Entrypoint Dispatch
//!
//! Maps an invocation's function name to its use case. Each invocation
//! runs against its own staged write set, committed only when the use case
//! succeeds, so a failed call never leaves a partial write behind.

use std::sync::Arc;

use crate::application::{
    ClinicConfig, GetDoctorUseCase, GetPatientUseCase, RecordVisitInput, RecordVisitUseCase,
    RegisterDoctorUseCase, RegisterPatientUseCase,
};
use crate::domain::ledger::Ledger;
use crate::domain::validation::{DoctorForm, FieldError, PatientForm};
use crate::error::{ClinicError, ClinicResult};
use crate::infra::codec::{DoctorRecord, PatientRecord};
use crate::infra::ledger_store::LedgerRepository;
use crate::infra::staged::StagedLedger;
use crate::presentation::dto::{Invocation, InvokeResponse};

/// Operations reachable through an invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    RegisterDoctor,
    GetDoctor,
    RegisterPatient,
    GetPatient,
    RecordVisit,
}

static OPERATIONS: [(&str, Operation); 5] = [
    ("RegisterDoctor", Operation::RegisterDoctor),
    ("GetDoctor", Operation::GetDoctor),
    ("RegisterPatient", Operation::RegisterPatient),
    ("GetPatient", Operation::GetPatient),
    ("RecordVisit", Operation::RecordVisit),
];

impl Operation {
    /// Find the operation registered under a function name (exact match)
    pub fn lookup(name: &str) -> Option<Self> {
        OPERATIONS
            .iter()
            .find(|(registered, _)| *registered == name)
            .map(|(_, op)| *op)
    }

    pub fn name(self) -> &'static str {
        OPERATIONS
            .iter()
            .find(|(_, op)| *op == self)
            .map_or("", |(name, _)| *name)
    }

    pub fn all() -> impl Iterator<Item = Operation> {
        OPERATIONS.iter().map(|(_, op)| *op)
    }
}

/// Split the positional arguments, refusing any other count.
fn positional<const N: usize>(op: Operation, args: Vec<String>) -> ClinicResult<[String; N]> {
    let actual = args.len();
    args.try_into()
        .map_err(|_: Vec<String>| ClinicError::InvalidArguments {
            function: op.name(),
            expected: N,
            actual,
        })
}

/// Age arrives as text; anything that is not a whole number is refused
/// before the operation runs.
fn parse_age(raw: String) -> Result<i64, FieldError> {
    raw.parse().map_err(|_| FieldError::AgeNotANumber { raw })
}

type StagedRepository<L> = LedgerRepository<StagedLedger<L>>;

/// Routes invocations to use cases over a shared ledger gateway
pub struct Dispatcher<L> {
    ledger: Arc<L>,
    config: ClinicConfig,
}

impl<L> Dispatcher<L>
where
    L: Ledger + Send + Sync,
{
    pub fn new(ledger: Arc<L>, config: ClinicConfig) -> Self {
        Self { ledger, config }
    }

    /// Run one invocation and report its outcome. Failures are logged here
    /// and nowhere else.
    pub async fn invoke(&self, invocation: Invocation) -> InvokeResponse {
        let function = invocation.function.clone();

        match self.execute(invocation).await {
            Ok(payload) => InvokeResponse::ok(payload),
            Err(err) => {
                tracing::debug!(function = %function, "Invocation failed");
                err.log();
                InvokeResponse::from(err)
            }
        }
    }

    /// Run one invocation, returning the read payload if there is one.
    pub async fn execute(&self, invocation: Invocation) -> ClinicResult<Option<serde_json::Value>> {
        let op = Operation::lookup(&invocation.function)
            .ok_or_else(|| ClinicError::UnknownFunction(invocation.function.clone()))?;

        let stage = Arc::new(StagedLedger::new(Arc::clone(&self.ledger)));
        let repo = Arc::new(LedgerRepository::new(
            Arc::clone(&stage),
            self.config.key_layout,
        ));

        let payload = Self::run(op, invocation.args, repo).await?;
        stage.commit().await?;

        Ok(payload)
    }

    async fn run(
        op: Operation,
        args: Vec<String>,
        repo: Arc<StagedRepository<L>>,
    ) -> ClinicResult<Option<serde_json::Value>> {
        match op {
            Operation::RegisterDoctor => {
                let [doctor_id, first_name, last_name, password, age, phone_number] =
                    positional(op, args)?;
                let form = DoctorForm {
                    doctor_id,
                    first_name,
                    last_name,
                    password,
                    age: parse_age(age)?,
                    phone_number,
                };
                RegisterDoctorUseCase::new(repo).execute(form).await?;
                Ok(None)
            }
            Operation::GetDoctor => {
                let [doctor_id] = positional(op, args)?;
                let doctor = GetDoctorUseCase::new(repo).execute(&doctor_id).await?;
                Ok(Some(serde_json::to_value(DoctorRecord::from(&doctor))?))
            }
            Operation::RegisterPatient => {
                let [
                    patient_id,
                    first_name,
                    last_name,
                    password,
                    age,
                    phone_number,
                    emergency_phone_number,
                    address,
                    blood_group,
                ] = positional(op, args)?;
                let form = PatientForm {
                    patient_id,
                    first_name,
                    last_name,
                    password,
                    age: parse_age(age)?,
                    phone_number,
                    emergency_phone_number,
                    address,
                    blood_group,
                };
                RegisterPatientUseCase::new(repo).execute(form).await?;
                Ok(None)
            }
            Operation::GetPatient => {
                let [patient_id] = positional(op, args)?;
                let patient = GetPatientUseCase::new(repo).execute(&patient_id).await?;
                Ok(Some(serde_json::to_value(PatientRecord::from(&patient))?))
            }
            Operation::RecordVisit => {
                let [patient_id, doctor_id, visit_date, symptoms, diagnosis] =
                    positional(op, args)?;
                let input = RecordVisitInput {
                    patient_id,
                    doctor_id,
                    visit_date,
                    symptoms,
                    diagnosis,
                };
                RecordVisitUseCase::new(repo).execute(input).await?;
                Ok(None)
            }
        }
    }
}
