//! Payload encryption using AES-CBC with PKCS#7 padding
//!
//! Pure functions with no internal randomness: identical
//! (plaintext, IV, key) inputs always produce identical ciphertext.
//! Key and IV lengths are enforced by [`Key`](super::material::Key) and
//! [`Iv`] at construction, so the cipher here can never be handed
//! malformed material.

use aes::{
    Aes128, Aes192, Aes256,
    cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::Pkcs7},
};

use super::{
    error::CipherError,
    material::{BLOCK_SIZE, Iv, Key, KeySize},
};

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes192CbcEnc = cbc::Encryptor<Aes192>;
type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes192CbcDec = cbc::Decryptor<Aes192>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Encrypt a payload under AES-CBC with PKCS#7 padding.
///
/// Returns the ciphertext: `plaintext` padded to the next multiple of
/// [`BLOCK_SIZE`] and chained block-by-block from `iv`. Block-aligned
/// input (including empty input) gains a full padding block, so the
/// output is always at least one block and at most one block longer than
/// the input.
///
/// Deterministic and side-effect free; inputs are not mutated.
///
/// # Security
///
/// - Never reuse `iv` with the same key for a different plaintext
/// - The ciphertext is not authenticated; see the crate-level docs
pub fn encrypt(plaintext: &[u8], iv: &Iv, key: &Key) -> Vec<u8> {
    match key.size() {
        KeySize::Aes128 => {
            let Ok(cipher) = Aes128CbcEnc::new_from_slices(key.as_bytes(), iv.as_bytes()) else {
                unreachable!("Key and Iv lengths are validated at construction");
            };
            cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext)
        },
        KeySize::Aes192 => {
            let Ok(cipher) = Aes192CbcEnc::new_from_slices(key.as_bytes(), iv.as_bytes()) else {
                unreachable!("Key and Iv lengths are validated at construction");
            };
            cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext)
        },
        KeySize::Aes256 => {
            let Ok(cipher) = Aes256CbcEnc::new_from_slices(key.as_bytes(), iv.as_bytes()) else {
                unreachable!("Key and Iv lengths are validated at construction");
            };
            cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext)
        },
    }
}

/// Decrypt an AES-CBC ciphertext and strip its PKCS#7 padding.
///
/// Inverse of [`encrypt`] under the same key and IV: recovers the
/// original payload bit for bit.
///
/// # Errors
///
/// - `InvalidCiphertextLength`: input is empty or not a multiple of
///   [`BLOCK_SIZE`] — rejected before any decryption is attempted
/// - `InvalidPadding`: decrypted trailing bytes are not valid PKCS#7
///   padding (wrong key, wrong IV on a one-block message, or corrupted
///   ciphertext)
pub fn decrypt(ciphertext: &[u8], iv: &Iv, key: &Key) -> Result<Vec<u8>, CipherError> {
    if ciphertext.is_empty() || !ciphertext.len().is_multiple_of(BLOCK_SIZE) {
        return Err(CipherError::InvalidCiphertextLength { actual: ciphertext.len() });
    }

    let unpadded = match key.size() {
        KeySize::Aes128 => {
            let Ok(cipher) = Aes128CbcDec::new_from_slices(key.as_bytes(), iv.as_bytes()) else {
                unreachable!("Key and Iv lengths are validated at construction");
            };
            cipher.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        },
        KeySize::Aes192 => {
            let Ok(cipher) = Aes192CbcDec::new_from_slices(key.as_bytes(), iv.as_bytes()) else {
                unreachable!("Key and Iv lengths are validated at construction");
            };
            cipher.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        },
        KeySize::Aes256 => {
            let Ok(cipher) = Aes256CbcDec::new_from_slices(key.as_bytes(), iv.as_bytes()) else {
                unreachable!("Key and Iv lengths are validated at construction");
            };
            cipher.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        },
    };

    unpadded.map_err(|_| CipherError::InvalidPadding)
}
