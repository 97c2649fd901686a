//! Ledger-Backed Repository Implementations

use std::sync::Arc;

use kernel::id::markers;

use crate::domain::entity::{doctor::Doctor, patient::Patient};
use crate::domain::ledger::Ledger;
use crate::domain::repository::{DoctorRepository, PatientRepository};
use crate::error::{ClinicError, ClinicResult};
use crate::infra::codec::RecordCodec;
use crate::infra::keys::KeyLayout;

/// Repository over any ledger gateway
pub struct LedgerRepository<L> {
    ledger: Arc<L>,
    layout: KeyLayout,
}

impl<L> Clone for LedgerRepository<L> {
    fn clone(&self) -> Self {
        Self {
            ledger: Arc::clone(&self.ledger),
            layout: self.layout,
        }
    }
}

impl<L> LedgerRepository<L>
where
    L: Ledger + Send + Sync,
{
    pub fn new(ledger: Arc<L>, layout: KeyLayout) -> Self {
        Self { ledger, layout }
    }
}

// ============================================================================
// Doctor Repository Implementation
// ============================================================================

impl<L> DoctorRepository for LedgerRepository<L>
where
    L: Ledger + Send + Sync,
{
    async fn exists(&self, doctor_id: &str) -> ClinicResult<bool> {
        let key = self.layout.key::<markers::Doctor>(doctor_id);
        Ok(self.ledger.get_state(&key).await?.is_some())
    }

    async fn find(&self, doctor_id: &str) -> ClinicResult<Option<Doctor>> {
        let key = self.layout.key::<markers::Doctor>(doctor_id);
        self.ledger
            .get_state(&key)
            .await?
            .map(|bytes| Doctor::decode(&bytes))
            .transpose()
    }

    async fn create(&self, doctor: &Doctor) -> ClinicResult<()> {
        let key = self.layout.key::<markers::Doctor>(doctor.doctor_id.as_str());
        let bytes = doctor.encode()?;

        if !self.ledger.put_state_if_absent(&key, bytes).await? {
            return Err(ClinicError::AlreadyExists {
                kind: doctor.doctor_id.label(),
                id: doctor.doctor_id.to_string(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Patient Repository Implementation
// ============================================================================

impl<L> PatientRepository for LedgerRepository<L>
where
    L: Ledger + Send + Sync,
{
    async fn exists(&self, patient_id: &str) -> ClinicResult<bool> {
        let key = self.layout.key::<markers::Patient>(patient_id);
        Ok(self.ledger.get_state(&key).await?.is_some())
    }

    async fn find(&self, patient_id: &str) -> ClinicResult<Option<Patient>> {
        let key = self.layout.key::<markers::Patient>(patient_id);
        self.ledger
            .get_state(&key)
            .await?
            .map(|bytes| Patient::decode(&bytes))
            .transpose()
    }

    async fn create(&self, patient: &Patient) -> ClinicResult<()> {
        let key = self.layout.key::<markers::Patient>(patient.patient_id.as_str());
        let bytes = patient.encode()?;

        if !self.ledger.put_state_if_absent(&key, bytes).await? {
            return Err(ClinicError::AlreadyExists {
                kind: patient.patient_id.label(),
                id: patient.patient_id.to_string(),
            });
        }
        Ok(())
    }

    async fn update(&self, patient: &Patient) -> ClinicResult<()> {
        let key = self.layout.key::<markers::Patient>(patient.patient_id.as_str());
        self.ledger.put_state(&key, patient.encode()?).await?;
        Ok(())
    }
}
