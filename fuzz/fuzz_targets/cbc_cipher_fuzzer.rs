//! Fuzz target for the AES-CBC cipher core
//!
//! Tests key/IV construction and encrypt/decrypt under adversarial inputs.
//!
//! # Strategy
//!
//! - Arbitrary payloads (empty, small, large)
//! - All three key sizes plus invalid key/IV material
//! - Decrypt of completely arbitrary byte sequences
//! - Single-byte ciphertext corruption
//!
//! # Invariants
//!
//! - Round-trip always recovers the payload exactly
//! - Ciphertext length is payload length rounded up one block
//! - Decrypt never panics, whatever the input
//! - Corruption either fails padding validation or changes the payload
//! - Invalid material is rejected at construction, never later

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sealbox_crypto::{BLOCK_SIZE, CipherError, Iv, Key, decrypt, encrypt};

#[derive(Debug, Clone, Arbitrary)]
struct CipherScenario {
    key_material: KeyMaterial,
    iv_bytes: [u8; BLOCK_SIZE],
    operations: Vec<CipherOperation>,
}

#[derive(Debug, Clone, Arbitrary)]
enum KeyMaterial {
    Aes128([u8; 16]),
    Aes192([u8; 24]),
    Aes256([u8; 32]),
    Invalid(Vec<u8>),
}

impl KeyMaterial {
    fn as_bytes(&self) -> &[u8] {
        match self {
            KeyMaterial::Aes128(b) => b,
            KeyMaterial::Aes192(b) => b,
            KeyMaterial::Aes256(b) => b,
            KeyMaterial::Invalid(b) => b,
        }
    }
}

#[derive(Debug, Clone, Arbitrary)]
enum CipherOperation {
    /// Encrypt a payload and verify the round-trip
    Roundtrip { payload: Vec<u8> },
    /// Decrypt arbitrary bytes that were never produced by encrypt
    DecryptGarbage { bytes: Vec<u8> },
    /// Corrupt one ciphertext byte and decrypt
    Corrupt { payload: Vec<u8>, position: u16, mask: u8 },
}

fuzz_target!(|scenario: CipherScenario| {
    // INVARIANT 1: Key construction only succeeds for AES sizes
    let key = match Key::from_bytes(scenario.key_material.as_bytes()) {
        Ok(key) => key,
        Err(CipherError::InvalidKeyMaterial { actual }) => {
            assert!(!matches!(actual, 16 | 24 | 32), "valid size must not be rejected");
            return;
        },
        Err(_) => unreachable!("construction fails only with InvalidKeyMaterial"),
    };

    let iv = Iv::from_bytes(&scenario.iv_bytes).unwrap();

    for op in scenario.operations {
        match op {
            CipherOperation::Roundtrip { payload } => {
                let ciphertext = encrypt(&payload, &iv, &key);

                // INVARIANT 2: Expansion bound holds for every length
                assert_eq!(
                    ciphertext.len(),
                    (payload.len() / BLOCK_SIZE + 1) * BLOCK_SIZE,
                    "ciphertext must be payload rounded up one block"
                );

                // INVARIANT 3: Round-trip is exact
                let decrypted = decrypt(&ciphertext, &iv, &key);
                assert_eq!(decrypted.ok().as_deref(), Some(payload.as_slice()));
            },

            CipherOperation::DecryptGarbage { bytes } => {
                // INVARIANT 4: Decrypt never panics on arbitrary input
                match decrypt(&bytes, &iv, &key) {
                    Ok(_) | Err(CipherError::InvalidPadding) => {},
                    Err(CipherError::InvalidCiphertextLength { actual }) => {
                        assert!(actual == 0 || actual % BLOCK_SIZE != 0);
                    },
                    Err(_) => unreachable!("decrypt has no other failure modes"),
                }
            },

            CipherOperation::Corrupt { payload, position, mask } => {
                let mut ciphertext = encrypt(&payload, &iv, &key);
                let position = position as usize % ciphertext.len();
                ciphertext[position] ^= mask;

                if mask == 0 {
                    continue;
                }

                // INVARIANT 5: Corruption is never silent
                match decrypt(&ciphertext, &iv, &key) {
                    Err(CipherError::InvalidPadding) => {},
                    Ok(recovered) => assert_ne!(recovered, payload),
                    Err(_) => unreachable!("length was untouched"),
                }
            },
        }
    }
});
