//! Clinic Records Core
//!
//! Doctor and patient identity records plus an append-only visit history,
//! kept in the world state of a key-value ledger.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, field validator, ledger and repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - Stored record format, key layout, ledger gateways
//! - `presentation/` - Invocation DTOs and the entrypoint dispatch
//!
//! ## Record Model
//! - A record is created once by its register operation and never replaced
//! - Passwords are stored as a SHA-256 hex digest, never in clear text
//! - A patient's visits only grow, in the order they were recorded
//! - Each invocation commits all of its writes or none of them

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{ClinicConfig, KeyLayout};
pub use domain::ledger::{Ledger, LedgerError};
pub use error::{ClinicError, ClinicResult};
pub use infra::{InMemoryLedger, LedgerRepository, StagedLedger};
pub use presentation::{Dispatcher, Invocation, InvokeResponse};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::infra::codec::*;
}

#[cfg(test)]
mod tests;
