//! Password Digests
//!
//! Secrets are reduced to a single unsalted SHA-256 digest, rendered as
//! 64 lowercase hex characters. This is the exact format of the digests
//! already stored on the ledger; changing the algorithm would orphan every
//! existing record, so it stays fixed here.
//!
//! ## Handling guarantees
//! - Clear text is zeroized when dropped and redacted in `Debug`
//! - Digests are compared in constant time
//! - Neither type ever logs or displays the secret

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{constant_time_eq, is_sha256_hex, sha256_hex};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    /// Secret was empty
    #[error("Password cannot be empty")]
    Empty,

    /// Stored digest is not a 64-char lowercase hex string
    #[error("Invalid password digest format")]
    InvalidDigestFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text secret with automatic memory zeroization
///
/// Does not implement `Clone`, so the secret exists in exactly one place
/// until it is hashed and dropped.
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("secret".to_string()).unwrap();
/// let digest = password.hash();
/// assert_eq!(
///     digest.as_hex(),
///     "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b"
/// );
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap a secret. Any non-empty string is accepted as-is: the digest
    /// must match what was computed from the very same bytes elsewhere.
    pub fn new(raw: String) -> Result<Self, PasswordError> {
        if raw.is_empty() {
            return Err(PasswordError::Empty);
        }
        Ok(Self(raw))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Digest the secret.
    pub fn hash(&self) -> HashedPassword {
        HashedPassword {
            hex: sha256_hex(self.as_bytes()),
        }
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Stored password digest
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hex: String,
}

impl HashedPassword {
    /// Rehydrate a digest read from storage, checking its shape.
    pub fn from_hex(s: impl Into<String>) -> Result<Self, PasswordError> {
        let hex = s.into();
        if !is_sha256_hex(&hex) {
            return Err(PasswordError::InvalidDigestFormat);
        }
        Ok(Self { hex })
    }

    /// Rehydrate a digest without checking it. Legacy records were written
    /// without any shape guarantee and must still be readable.
    pub fn from_stored(s: impl Into<String>) -> Self {
        Self { hex: s.into() }
    }

    pub fn as_hex(&self) -> &str {
        &self.hex
    }

    /// Check a clear-text secret against this digest in constant time.
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        let candidate = sha256_hex(password.as_bytes());
        constant_time_eq(candidate.as_bytes(), self.hex.as_bytes())
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hex", &"[DIGEST]")
            .finish()
    }
}
