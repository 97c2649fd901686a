//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, hex digests, constant-time compare)
//! - Password digests (unsalted single-round SHA-256, byte compatible with
//!   digests already stored on the ledger)

pub mod crypto;
pub mod password;
