//! Error types for symmetric cipher operations

use thiserror::Error;

/// Errors from key/IV generation and cipher operations
#[derive(Debug, Error)]
pub enum CipherError {
    /// Requested key length is not supported by AES
    #[error("unsupported key length: {bits} bits (supported: 128, 192, 256)")]
    UnsupportedKeyLength {
        /// The requested length in bits
        bits: usize,
    },

    /// The secure random source could not produce bytes
    /// This can happen when OS entropy is not yet initialized
    #[error("entropy source unavailable: {reason}")]
    EntropySourceUnavailable {
        /// Reason reported by the underlying source
        reason: String,
    },

    /// Raw key bytes do not form a supported AES key
    #[error("invalid key material: {actual} bytes is not a supported AES key size")]
    InvalidKeyMaterial {
        /// Actual length of the supplied bytes
        actual: usize,
    },

    /// Raw IV bytes are not exactly one cipher block
    #[error("invalid IV length: expected {expected} bytes, got {actual}")]
    InvalidIvLength {
        /// Expected IV length (one block)
        expected: usize,
        /// Actual length of the supplied bytes
        actual: usize,
    },

    /// Ciphertext length is not a positive multiple of the block size
    #[error("invalid ciphertext length: {actual} bytes is not a positive multiple of the block size")]
    InvalidCiphertextLength {
        /// Actual ciphertext length
        actual: usize,
    },

    /// Decrypted trailing bytes do not form valid PKCS#7 padding
    /// (wrong key, wrong IV on the final block, or corrupted ciphertext)
    #[error("padding validation failed")]
    InvalidPadding,
}

impl CipherError {
    /// Returns true if this error is transient and may succeed on retry.
    ///
    /// Only entropy exhaustion is transient — a blocked entropy draw is a
    /// bounded, retryable wait. Everything else indicates bad inputs or
    /// corrupted ciphertext and will fail again unchanged; retry policy
    /// belongs to the caller either way.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::EntropySourceUnavailable { .. })
    }
}
