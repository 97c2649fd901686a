//! Infrastructure Layer
//!
//! Stored record format, key layout, and ledger gateway implementations.

pub mod codec;
pub mod keys;
pub mod ledger_store;
pub mod memory;
pub mod staged;

pub use codec::{DoctorRecord, PatientRecord, RecordCodec, VisitRecord};
pub use keys::KeyLayout;
pub use ledger_store::LedgerRepository;
pub use memory::InMemoryLedger;
pub use staged::StagedLedger;
