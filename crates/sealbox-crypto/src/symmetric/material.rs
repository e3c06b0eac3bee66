//! Key and IV material: validated-at-construction value types
//!
//! Wrong-sized key or IV bytes are rejected when the value is built, so
//! the cipher operations themselves never see malformed material.
//!
//! # Security Properties
//!
//! - Key bytes are zeroized when the [`Key`] is dropped
//! - [`Key`] has no `Debug` or `Display` impl and is never serialized
//! - IVs are not secret; [`Iv`] is a plain `Copy` value

use zeroize::Zeroize;

use super::{entropy::EntropySource, error::CipherError};

/// AES block size in bytes; also the exact IV length.
pub const BLOCK_SIZE: usize = 16;

/// Supported AES key sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySize {
    /// AES-128 (16-byte key)
    Aes128,
    /// AES-192 (24-byte key)
    Aes192,
    /// AES-256 (32-byte key)
    Aes256,
}

impl KeySize {
    /// Resolve a caller-specified bit length to a supported key size.
    ///
    /// # Errors
    ///
    /// - `UnsupportedKeyLength`: `bits` is not 128, 192, or 256
    pub fn from_bits(bits: usize) -> Result<Self, CipherError> {
        match bits {
            128 => Ok(Self::Aes128),
            192 => Ok(Self::Aes192),
            256 => Ok(Self::Aes256),
            _ => Err(CipherError::UnsupportedKeyLength { bits }),
        }
    }

    /// Key length in bits.
    pub fn bits(self) -> usize {
        self.byte_len() * 8
    }

    /// Key length in bytes.
    pub fn byte_len(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }
}

/// A secret AES key.
///
/// Owned by the session that generated it. Must never be logged,
/// persisted, or transmitted — there is deliberately no `Debug`,
/// `Display`, or serialization. The material is zeroized on drop.
#[derive(Clone)]
pub struct Key {
    bytes: Vec<u8>,
    size: KeySize,
}

impl Key {
    /// Build a key from existing raw material.
    ///
    /// # Errors
    ///
    /// - `InvalidKeyMaterial`: `bytes` is not 16, 24, or 32 bytes long
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CipherError> {
        let size = match bytes.len() {
            16 => KeySize::Aes128,
            24 => KeySize::Aes192,
            32 => KeySize::Aes256,
            actual => return Err(CipherError::InvalidKeyMaterial { actual }),
        };
        Ok(Self { bytes: bytes.to_vec(), size })
    }

    /// The key size this material is valid for.
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Raw key bytes.
    ///
    /// Handle with care: copies of this slice are not zeroized.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// A CBC initialization vector: exactly one cipher block of random bytes.
///
/// Not secret, but never reuse one IV with the same key for different
/// plaintexts — generate a fresh IV per payload with [`generate_iv`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iv([u8; BLOCK_SIZE]);

impl Iv {
    /// Build an IV from existing raw bytes.
    ///
    /// # Errors
    ///
    /// - `InvalidIvLength`: `bytes` is not exactly [`BLOCK_SIZE`] bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CipherError> {
        let block: [u8; BLOCK_SIZE] = bytes.try_into().map_err(|_| {
            CipherError::InvalidIvLength { expected: BLOCK_SIZE, actual: bytes.len() }
        })?;
        Ok(Self(block))
    }

    /// Raw IV bytes.
    pub fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }
}

/// Generate a fresh key of the requested bit length.
///
/// Draws `bits / 8` bytes from the entropy source. The only state touched
/// is the source itself; the returned key is an immutable value.
///
/// # Errors
///
/// - `UnsupportedKeyLength`: `bits` is not 128, 192, or 256
/// - `EntropySourceUnavailable`: the entropy source failed
pub fn generate_key(bits: usize, entropy: &impl EntropySource) -> Result<Key, CipherError> {
    let size = KeySize::from_bits(bits)?;
    let mut bytes = vec![0u8; size.byte_len()];
    entropy.random_bytes(&mut bytes)?;
    Ok(Key { bytes, size })
}

/// Generate a fresh one-block IV.
///
/// # Errors
///
/// - `EntropySourceUnavailable`: the entropy source failed
pub fn generate_iv(entropy: &impl EntropySource) -> Result<Iv, CipherError> {
    let mut block = [0u8; BLOCK_SIZE];
    entropy.random_bytes(&mut block)?;
    Ok(Iv(block))
}
