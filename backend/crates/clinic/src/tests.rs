//! Integration-style tests for the clinic crate
//!
//! Use cases run against the in-memory ledger; dispatch tests go through
//! the same path an invoker does.

#[cfg(test)]
mod support {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    use crate::domain::ledger::{Ledger, LedgerError, WriteOp};
    use crate::domain::validation::{DoctorForm, PatientForm};
    use crate::infra::{InMemoryLedger, KeyLayout, LedgerRepository};

    pub const SECRET_DIGEST: &str =
        "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b";

    pub fn repo() -> (Arc<InMemoryLedger>, Arc<LedgerRepository<InMemoryLedger>>) {
        repo_with(KeyLayout::default())
    }

    pub fn repo_with(
        layout: KeyLayout,
    ) -> (Arc<InMemoryLedger>, Arc<LedgerRepository<InMemoryLedger>>) {
        let ledger = Arc::new(InMemoryLedger::new());
        let repo = Arc::new(LedgerRepository::new(Arc::clone(&ledger), layout));
        (ledger, repo)
    }

    pub fn jane() -> PatientForm {
        PatientForm {
            patient_id: "P1".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            password: "secret".to_string(),
            age: 30,
            phone_number: "1234567890".to_string(),
            emergency_phone_number: "0987654321".to_string(),
            address: "221B Baker St".to_string(),
            blood_group: "O+".to_string(),
        }
    }

    pub fn house() -> DoctorForm {
        DoctorForm {
            doctor_id: "D1".to_string(),
            first_name: "Gregory".to_string(),
            last_name: "House".to_string(),
            password: "secret".to_string(),
            age: 52,
            phone_number: "5550001111".to_string(),
        }
    }

    /// Formatted log output collected in memory
    #[derive(Clone, Default)]
    pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
            tracing_subscriber::fmt()
                .with_writer(self.clone())
                .with_ansi(false)
                .without_time()
                .finish()
        }

        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Gateway that refuses every call
    pub struct DownLedger;

    impl Ledger for DownLedger {
        async fn get_state(&self, _key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
            Err(LedgerError::Unavailable("peer unreachable".to_string()))
        }

        async fn put_state(&self, _key: &str, _value: Vec<u8>) -> Result<(), LedgerError> {
            Err(LedgerError::Unavailable("peer unreachable".to_string()))
        }

        async fn put_state_if_absent(
            &self,
            _key: &str,
            _value: Vec<u8>,
        ) -> Result<bool, LedgerError> {
            Err(LedgerError::Unavailable("peer unreachable".to_string()))
        }

        async fn apply(&self, _writes: Vec<WriteOp>) -> Result<(), LedgerError> {
            Err(LedgerError::Unavailable("peer unreachable".to_string()))
        }
    }
}

#[cfg(test)]
mod registry_tests {
    use std::sync::Arc;

    use tokio_test::{assert_err, assert_ok};

    use super::support::*;
    use crate::application::{
        GetDoctorUseCase, GetPatientUseCase, RegisterDoctorUseCase, RegisterPatientUseCase,
    };
    use crate::domain::ledger::Ledger;
    use crate::domain::validation::{DoctorForm, FieldError, PatientForm};
    use crate::error::ClinicError;
    use crate::infra::{KeyLayout, LedgerRepository};

    #[tokio::test]
    async fn test_register_then_get_patient() {
        let (_, repo) = repo();
        assert_ok!(RegisterPatientUseCase::new(repo.clone()).execute(jane()).await);

        let patient = assert_ok!(GetPatientUseCase::new(repo).execute("P1").await);
        assert_eq!(patient.patient_id.as_str(), "P1");
        assert_eq!(patient.first_name.as_str(), "Jane");
        assert_eq!(patient.last_name.as_str(), "Doe");
        assert_eq!(patient.password.as_hex(), SECRET_DIGEST);
        assert_eq!(patient.age.years(), 30);
        assert_eq!(patient.phone_number.as_str(), "1234567890");
        assert_eq!(patient.emergency_phone_number.as_str(), "0987654321");
        assert_eq!(patient.address.as_str(), "221B Baker St");
        assert_eq!(patient.blood_group.as_str(), "O+");
        assert!(patient.allergies.is_none());
        assert!(patient.visits().is_empty());
    }

    #[tokio::test]
    async fn test_register_then_get_doctor() {
        let (_, repo) = repo();
        assert_ok!(RegisterDoctorUseCase::new(repo.clone()).execute(house()).await);

        let doctor = assert_ok!(GetDoctorUseCase::new(repo).execute("D1").await);
        assert_eq!(doctor.doctor_id.as_str(), "D1");
        assert_eq!(doctor.first_name.as_str(), "Gregory");
        assert_eq!(doctor.last_name.as_str(), "House");
        assert_eq!(doctor.password.as_hex(), SECRET_DIGEST);
        assert_eq!(doctor.age.years(), 52);
        assert_eq!(doctor.phone_number.as_str(), "5550001111");
        assert!(doctor.associated_patients.is_empty());
    }

    #[tokio::test]
    async fn test_registration_log_names_only_the_id() {
        let logs = CapturedLogs::default();
        let _guard = tracing::subscriber::set_default(logs.subscriber());

        let (_, repo) = repo();
        assert_ok!(RegisterPatientUseCase::new(repo.clone()).execute(jane()).await);
        assert_ok!(RegisterDoctorUseCase::new(repo).execute(house()).await);

        let out = logs.contents();
        let patient_line = out.lines().find(|l| l.contains("Patient registered")).unwrap();
        assert!(patient_line.contains("patient_id=P1"));
        assert!(!patient_line.contains("blood_group"));
        assert!(!patient_line.contains("O+"));

        let doctor_line = out.lines().find(|l| l.contains("Doctor registered")).unwrap();
        assert!(doctor_line.contains("doctor_id=D1"));
        assert!(!doctor_line.contains("age="));
        assert!(!doctor_line.contains("52"));
    }

    #[tokio::test]
    async fn test_duplicate_registration_leaves_state_unchanged() {
        let (ledger, repo) = repo();
        let use_case = RegisterPatientUseCase::new(repo);
        assert_ok!(use_case.execute(jane()).await);
        let before = ledger.snapshot().await;

        let again = PatientForm {
            first_name: "Other".to_string(),
            ..jane()
        };
        let err = assert_err!(use_case.execute(again).await);
        assert!(matches!(
            err,
            ClinicError::AlreadyExists { kind: "Patient", ref id } if id == "P1"
        ));
        assert_eq!(ledger.snapshot().await, before);
    }

    #[tokio::test]
    async fn test_duplicate_doctor_registration_leaves_state_unchanged() {
        let (ledger, repo) = repo();
        let use_case = RegisterDoctorUseCase::new(repo.clone());
        assert_ok!(use_case.execute(house()).await);
        let before = ledger.snapshot().await;

        let again = DoctorForm {
            first_name: "Other".to_string(),
            ..house()
        };
        let err = assert_err!(use_case.execute(again).await);
        assert!(matches!(
            err,
            ClinicError::AlreadyExists { kind: "Doctor", ref id } if id == "D1"
        ));
        assert_eq!(ledger.snapshot().await, before);

        let doctor = assert_ok!(GetDoctorUseCase::new(repo).execute("D1").await);
        assert_eq!(doctor.first_name.as_str(), "Gregory");
    }

    #[tokio::test]
    async fn test_existence_is_checked_before_fields() {
        let (_, repo) = repo();
        let use_case = RegisterDoctorUseCase::new(repo);
        assert_ok!(use_case.execute(house()).await);

        let invalid = DoctorForm {
            age: 0,
            ..house()
        };
        let err = assert_err!(use_case.execute(invalid).await);
        assert!(matches!(err, ClinicError::AlreadyExists { .. }));
    }

    #[tokio::test]
    async fn test_invalid_fields_write_nothing() {
        let (ledger, repo) = repo();
        let use_case = RegisterPatientUseCase::new(repo);

        for (age, phone) in [(0, "1234567890"), (150, "1234567890"), (30, "123456789")] {
            let form = PatientForm {
                age,
                phone_number: phone.to_string(),
                ..jane()
            };
            let err = assert_err!(use_case.execute(form).await);
            assert!(matches!(err, ClinicError::Validation(_)));
        }
        assert!(ledger.is_empty().await);
    }

    #[tokio::test]
    async fn test_age_boundaries_accepted() {
        let (_, repo) = repo();
        let use_case = RegisterDoctorUseCase::new(repo);
        for (id, age) in [("A1", 1), ("A149", 149)] {
            let form = DoctorForm {
                doctor_id: id.to_string(),
                age,
                ..house()
            };
            assert_ok!(use_case.execute(form).await);
        }
    }

    #[tokio::test]
    async fn test_validation_reports_field() {
        let (_, repo) = repo();
        let form = PatientForm {
            address: String::new(),
            ..jane()
        };
        let err = assert_err!(RegisterPatientUseCase::new(repo).execute(form).await);
        assert!(matches!(
            err,
            ClinicError::Validation(FieldError::Empty { field: "address" })
        ));
    }

    #[tokio::test]
    async fn test_get_unknown_ids() {
        let (_, repo) = repo();
        let err = assert_err!(GetDoctorUseCase::new(repo.clone()).execute("D404").await);
        assert!(matches!(err, ClinicError::NotFound { kind: "Doctor", .. }));

        // Ids that could never be registered are just absent
        let err = assert_err!(GetPatientUseCase::new(repo).execute("P:1").await);
        assert!(matches!(err, ClinicError::NotFound { kind: "Patient", .. }));
    }

    #[tokio::test]
    async fn test_corrupt_record_is_serialization_error() {
        let (ledger, repo) = repo();
        ledger.put_state("patient:P1", b"{oops".to_vec()).await.unwrap();

        let err = assert_err!(GetPatientUseCase::new(repo).execute("P1").await);
        assert!(matches!(err, ClinicError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_same_id_for_doctor_and_patient() {
        let (ledger, repo) = repo();
        let doctor = DoctorForm {
            doctor_id: "X1".to_string(),
            ..house()
        };
        let patient = PatientForm {
            patient_id: "X1".to_string(),
            ..jane()
        };
        assert_ok!(RegisterDoctorUseCase::new(repo.clone()).execute(doctor).await);
        assert_ok!(RegisterPatientUseCase::new(repo).execute(patient).await);
        assert_eq!(ledger.len().await, 2);
    }

    #[tokio::test]
    async fn test_legacy_layout_shares_one_keyspace() {
        let (ledger, repo) = repo_with(KeyLayout::Legacy);
        let doctor = DoctorForm {
            doctor_id: "X1".to_string(),
            ..house()
        };
        let patient = PatientForm {
            patient_id: "X1".to_string(),
            ..jane()
        };
        assert_ok!(RegisterDoctorUseCase::new(repo.clone()).execute(doctor).await);
        assert!(ledger.get_state("X1").await.unwrap().is_some());

        let err = assert_err!(RegisterPatientUseCase::new(repo.clone()).execute(patient).await);
        assert!(matches!(err, ClinicError::AlreadyExists { .. }));

        // A doctor record does not decode as a patient
        let err = assert_err!(GetPatientUseCase::new(repo).execute("X1").await);
        assert!(matches!(err, ClinicError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_ledger_failure_is_propagated() {
        let repo = Arc::new(LedgerRepository::new(Arc::new(DownLedger), KeyLayout::default()));
        let err = assert_err!(RegisterPatientUseCase::new(repo).execute(jane()).await);
        assert!(matches!(err, ClinicError::Ledger(_)));
        assert_eq!(err.kind(), crate::ErrorKind::LedgerUnavailable);
    }
}

#[cfg(test)]
mod visit_log_tests {
    use tokio_test::{assert_err, assert_ok};

    use super::support::*;
    use crate::application::{
        GetPatientUseCase, RecordVisitInput, RecordVisitUseCase, RegisterPatientUseCase,
    };
    use crate::domain::validation::FieldError;
    use crate::error::ClinicError;

    fn visit(patient_id: &str, doctor_id: &str, date: &str) -> RecordVisitInput {
        RecordVisitInput {
            patient_id: patient_id.to_string(),
            doctor_id: doctor_id.to_string(),
            visit_date: date.to_string(),
            symptoms: "fever".to_string(),
            diagnosis: "flu".to_string(),
        }
    }

    #[tokio::test]
    async fn test_visits_are_kept_in_call_order() {
        let (_, repo) = repo();
        assert_ok!(RegisterPatientUseCase::new(repo.clone()).execute(jane()).await);

        let record = RecordVisitUseCase::new(repo.clone());
        let dates = ["2024-01-03", "2024-01-01", "2024-01-02", "2024-01-01"];
        for date in dates {
            assert_ok!(record.execute(visit("P1", "D1", date)).await);
        }

        let patient = assert_ok!(GetPatientUseCase::new(repo).execute("P1").await);
        let recorded: Vec<&str> = patient.visits().iter().map(|v| v.visit_date()).collect();
        assert_eq!(recorded, dates);
    }

    #[tokio::test]
    async fn test_visit_keeps_identity_fields() {
        let (_, repo) = repo();
        assert_ok!(RegisterPatientUseCase::new(repo.clone()).execute(jane()).await);
        let before = assert_ok!(GetPatientUseCase::new(repo.clone()).execute("P1").await);

        assert_ok!(
            RecordVisitUseCase::new(repo.clone())
                .execute(visit("P1", "D1", "2024-01-01"))
                .await
        );

        let after = assert_ok!(GetPatientUseCase::new(repo).execute("P1").await);
        assert_eq!(after.password, before.password);
        assert_eq!(after.address, before.address);
        assert_eq!(after.visits().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_patient_writes_nothing() {
        let (ledger, repo) = repo();
        let err = assert_err!(
            RecordVisitUseCase::new(repo)
                .execute(visit("P2", "D1", "2024-01-02"))
                .await
        );
        assert!(matches!(err, ClinicError::NotFound { kind: "Patient", ref id } if id == "P2"));
        assert!(ledger.is_empty().await);
    }

    #[tokio::test]
    async fn test_unregistered_doctor_is_accepted() {
        let (_, repo) = repo();
        assert_ok!(RegisterPatientUseCase::new(repo.clone()).execute(jane()).await);
        assert_ok!(
            RecordVisitUseCase::new(repo)
                .execute(visit("P1", "NoSuchDoctor", "2024-01-01"))
                .await
        );
    }

    #[tokio::test]
    async fn test_empty_arguments_rejected_before_lookup() {
        let (_, repo) = repo();
        let use_case = RecordVisitUseCase::new(repo);

        // Unknown patient, but the empty field is reported first
        let err = assert_err!(use_case.execute(visit("P2", "D1", "")).await);
        assert!(matches!(
            err,
            ClinicError::Validation(FieldError::Empty { field: "visitDate" })
        ));

        let err = assert_err!(use_case.execute(visit("", "D1", "2024-01-01")).await);
        assert!(matches!(
            err,
            ClinicError::Validation(FieldError::Empty { field: "patientId" })
        ));
    }
}

#[cfg(test)]
mod dispatch_tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::support::*;
    use crate::application::ClinicConfig;
    use crate::domain::ledger::Ledger;
    use crate::infra::InMemoryLedger;
    use crate::presentation::{Dispatcher, Invocation};

    fn dispatcher() -> (Arc<InMemoryLedger>, Dispatcher<InMemoryLedger>) {
        let ledger = Arc::new(InMemoryLedger::new());
        let dispatcher = Dispatcher::new(Arc::clone(&ledger), ClinicConfig::default());
        (ledger, dispatcher)
    }

    fn register_jane() -> Invocation {
        Invocation::new(
            "RegisterPatient",
            [
                "P1",
                "Jane",
                "Doe",
                "secret",
                "30",
                "1234567890",
                "0987654321",
                "221B Baker St",
                "O+",
            ],
        )
    }

    #[tokio::test]
    async fn test_patient_scenario() {
        let (_, dispatcher) = dispatcher();

        assert!(dispatcher.invoke(register_jane()).await.is_ok());

        let resp = dispatcher
            .invoke(Invocation::new("GetPatient", ["P1"]))
            .await;
        assert_eq!(resp.status, 200);
        assert_eq!(
            resp.payload,
            Some(json!({
                "patientId": "P1",
                "firstName": "Jane",
                "lastName": "Doe",
                "password": SECRET_DIGEST,
                "age": 30,
                "phoneNumber": "1234567890",
                "emergPhoneNumber": "0987654321",
                "address": "221B Baker St",
                "bloodGroup": "O+",
                "allergies": "",
                "visits": []
            }))
        );

        let resp = dispatcher
            .invoke(Invocation::new(
                "RecordVisit",
                ["P1", "D1", "2024-01-01", "fever", "flu"],
            ))
            .await;
        assert!(resp.is_ok());

        let resp = dispatcher
            .invoke(Invocation::new("GetPatient", ["P1"]))
            .await;
        let payload = resp.payload.unwrap();
        assert_eq!(
            payload["visits"],
            json!([{"doctorId": "D1", "visitdate": "2024-01-01", "symptoms": "fever", "diagnosis": "flu"}])
        );

        let resp = dispatcher.invoke(register_jane()).await;
        assert_eq!(resp.status, 409);

        let resp = dispatcher
            .invoke(Invocation::new(
                "RecordVisit",
                ["P2", "D1", "2024-01-02", "cough", "cold"],
            ))
            .await;
        assert_eq!(resp.status, 404);
        assert_eq!(resp.message.as_deref(), Some("Patient P2 does not exist"));
    }

    #[tokio::test]
    async fn test_doctor_round_trip() {
        let (ledger, dispatcher) = dispatcher();
        let resp = dispatcher
            .invoke(Invocation::new(
                "RegisterDoctor",
                ["D1", "Gregory", "House", "secret", "52", "5550001111"],
            ))
            .await;
        assert!(resp.is_ok());
        assert!(ledger.get_state("doctor:D1").await.unwrap().is_some());

        let resp = dispatcher.invoke(Invocation::new("GetDoctor", ["D1"])).await;
        let payload = resp.payload.unwrap();
        assert_eq!(payload["doctorId"], "D1");
        assert_eq!(payload["password"], SECRET_DIGEST);
        assert_eq!(payload["PatiensAssociated"], json!([]));
    }

    #[tokio::test]
    async fn test_bad_invocations() {
        let (ledger, dispatcher) = dispatcher();

        let resp = dispatcher.invoke(Invocation::new("Increment", ["1"])).await;
        assert_eq!(resp.status, 400);
        assert_eq!(resp.message.as_deref(), Some("Unknown function: Increment"));

        let resp = dispatcher
            .invoke(Invocation::new("GetPatient", Vec::<String>::new()))
            .await;
        assert_eq!(resp.status, 400);
        assert_eq!(
            resp.message.as_deref(),
            Some("GetPatient expects 1 argument(s), got 0")
        );

        let mut args = register_jane().args;
        args[4] = "thirty".to_string();
        let resp = dispatcher
            .invoke(Invocation::new("RegisterPatient", args))
            .await;
        assert_eq!(resp.status, 400);
        assert!(ledger.is_empty().await);
    }

    #[tokio::test]
    async fn test_legacy_layout_uses_raw_keys() {
        let ledger = Arc::new(InMemoryLedger::new());
        let dispatcher = Dispatcher::new(Arc::clone(&ledger), ClinicConfig::legacy());

        assert!(dispatcher.invoke(register_jane()).await.is_ok());
        assert!(ledger.get_state("P1").await.unwrap().is_some());
        assert!(ledger.get_state("patient:P1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_invocation_commits_nothing() {
        let (ledger, dispatcher) = dispatcher();
        assert!(dispatcher.invoke(register_jane()).await.is_ok());
        let before = ledger.snapshot().await;

        let resp = dispatcher
            .invoke(Invocation::new(
                "RecordVisit",
                ["P1", "D1", "2024-01-01", "fever", ""],
            ))
            .await;
        assert_eq!(resp.status, 400);
        assert_eq!(ledger.snapshot().await, before);
    }

    #[tokio::test]
    async fn test_invocation_from_wire() {
        let (_, dispatcher) = dispatcher();
        let invocation: Invocation = serde_json::from_str(
            r#"{"Args":["RegisterDoctor","D7","Lisa","Cuddy","secret","45","5551234567"]}"#,
        )
        .unwrap();
        assert!(dispatcher.invoke(invocation).await.is_ok());

        let resp = dispatcher.invoke(Invocation::new("GetDoctor", ["D7"])).await;
        assert_eq!(resp.payload.unwrap()["lastName"], "Cuddy");
    }
}
