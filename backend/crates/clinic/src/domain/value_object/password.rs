//! Password Value Objects
//!
//! Domain wrappers around `platform::password`. The raw secret only lives
//! long enough to be digested; records carry the digest alone.

use std::fmt;

use platform::password::{ClearTextPassword, HashedPassword, PasswordError};

use crate::domain::validation::FieldError;

const FIELD: &str = "password";

// ============================================================================
// Raw Password (caller input)
// ============================================================================

/// Raw password from the invoker. Zeroized on drop.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: String) -> Result<Self, FieldError> {
        ClearTextPassword::new(raw)
            .map(Self)
            .map_err(|_| FieldError::Empty { field: FIELD })
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Password Hash (stored)
// ============================================================================

/// Digest derived once at registration and never recomputed.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(HashedPassword);

impl PasswordHash {
    pub fn from_raw(raw: &RawPassword) -> Self {
        Self(raw.inner().hash())
    }

    /// Rehydrate a digest from a stored record.
    ///
    /// Records written before validation was enforced may hold anything
    /// here, so the shape is not checked; see [`PasswordHash::is_well_formed`].
    pub fn from_stored(hex: impl Into<String>) -> Self {
        Self(HashedPassword::from_stored(hex))
    }

    /// Rehydrate a digest, refusing anything that is not a SHA-256 hex string.
    pub fn from_hex(hex: impl Into<String>) -> Result<Self, PasswordError> {
        HashedPassword::from_hex(hex).map(Self)
    }

    pub fn as_hex(&self) -> &str {
        self.0.as_hex()
    }

    pub fn is_well_formed(&self) -> bool {
        platform::crypto::is_sha256_hex(self.0.as_hex())
    }

    pub fn verify(&self, raw: &RawPassword) -> bool {
        self.0.verify(raw.inner())
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHash")
            .field("hex", &"[DIGEST]")
            .finish()
    }
}
