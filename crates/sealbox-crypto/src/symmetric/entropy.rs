//! Entropy source abstraction for deterministic testing.
//!
//! Decouples key and IV generation from the process-wide random source.
//! Production uses [`OsEntropy`] over the operating system CSPRNG; tests
//! supply deterministic sources for reproducibility.

use rand::{RngCore, rngs::OsRng};

use super::error::CipherError;

/// Abstract source of cryptographically secure random bytes.
///
/// # Safety
///
/// Implementations MUST guarantee:
///
/// - `random_bytes()` uses cryptographically secure entropy in production
/// - A filled buffer is fully overwritten (no partial fills on `Ok`)
///
/// Deterministic implementations are for tests only.
pub trait EntropySource {
    /// Fills the provided buffer with random bytes.
    ///
    /// # Errors
    ///
    /// - `EntropySourceUnavailable`: the underlying source could not be
    ///   initialized or could not produce bytes
    fn random_bytes(&self, buffer: &mut [u8]) -> Result<(), CipherError>;
}

/// Production entropy source backed by the operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn random_bytes(&self, buffer: &mut [u8]) -> Result<(), CipherError> {
        OsRng.try_fill_bytes(buffer).map_err(|err| CipherError::EntropySourceUnavailable {
            reason: err.to_string(),
        })
    }
}
