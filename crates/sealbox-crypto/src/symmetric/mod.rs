//! Symmetric cipher core: key/IV generation, AES-CBC encryption, decryption
//!
//! Every operation is a pure, stateless transformation of
//! (payload, IV, key) → result. There is no session state inside the core;
//! the caller owns the key/IV lifecycle. Calls share no mutable state and
//! may run concurrently without locking.
//!
//! ```text
//! payload bytes ──► encrypt(──, iv, key) ──► ciphertext
//! ciphertext    ──► decrypt(──, iv, key) ──► payload bytes
//! ```
//!
//! # Contracts
//!
//! - Round-trip: `decrypt(encrypt(p, iv, k), iv, k) == p` for every
//!   payload length, including empty and non-block-aligned
//! - Expansion: ciphertext length is `len(p)` rounded up to the next
//!   multiple of [`BLOCK_SIZE`] — block-aligned input gains a full
//!   padding block
//! - Failures are typed errors, never sentinel values

pub mod encryption;
pub mod entropy;
pub mod error;
pub mod material;

pub use encryption::{decrypt, encrypt};
pub use entropy::{EntropySource, OsEntropy};
pub use error::CipherError;
pub use material::{BLOCK_SIZE, Iv, Key, KeySize, generate_iv, generate_key};
