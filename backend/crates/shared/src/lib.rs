//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared by every
//! crate in the workspace:
//! - Common error types and result aliases
//! - Typed record identifiers and the character rule every key obeys
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all record kinds.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
