//! Sealbox Cryptographic Core
//!
//! Symmetric encryption for opaque payload buffers. The core is
//! format-agnostic: an image, an audio clip, and a text document are all
//! the same thing here — a byte buffer. Callers read payloads into memory,
//! hand them to the core, and persist whatever comes back.
//!
//! # Session Lifecycle
//!
//! A session generates one key and then encrypts any number of payloads
//! under it, each with its own freshly generated IV:
//!
//! ```text
//! EntropySource
//!        │
//!        ▼
//! generate_key / generate_iv
//!        │
//!        ▼
//! AES-CBC + PKCS#7 → Ciphertext
//!        │
//!        ▼
//! decrypt (same key + IV) → original payload, bit for bit
//! ```
//!
//! The key lives exactly as long as the session: generate it, use it for
//! every operation in the session, drop it. [`Key`] zeroizes its material
//! on drop and is never printed or serialized.
//!
//! # Security
//!
//! IV Reuse:
//! - Reusing one IV for multiple plaintexts under the same key lets an
//!   observer detect shared plaintext prefixes across messages
//! - The core accepts caller-supplied IVs as-is and does not police reuse;
//!   generate a fresh IV per payload with [`generate_iv`]
//!
//! No Authentication:
//! - CBC with PKCS#7 padding provides confidentiality only
//! - Ciphertext tampering is not detected; corruption usually surfaces as
//!   [`CipherError::InvalidPadding`], but an attacker who can observe that
//!   error has a padding oracle — do not expose decrypt failures across a
//!   trust boundary
//!
//! Determinism:
//! - `encrypt` has no internal randomness; identical (plaintext, IV, key)
//!   always produce identical ciphertext
//! - All randomness enters through the injected [`EntropySource`], so
//!   tests can supply deterministic sources

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod symmetric;

pub use symmetric::{
    BLOCK_SIZE, CipherError, EntropySource, Iv, Key, KeySize, OsEntropy, decrypt, encrypt,
    generate_iv, generate_key,
};
