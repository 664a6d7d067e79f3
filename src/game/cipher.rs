//! Substitution cipher engine

use crate::data::{EncryptionKey, Letter, PlayerKey};

/// Encrypt `plaintext` with `key`
///
/// Letters of either case become the key's uppercase cipher letter; every
/// other character is copied through. The result has exactly one character
/// per input character.
pub fn encrypt(plaintext: &str, key: &EncryptionKey) -> String {
    plaintext
        .chars()
        .map(|c| match Letter::from_char(c) {
            Some(plain) => key.encrypt(plain).to_char(),
            None => c,
        })
        .collect()
}

/// Decrypt `ciphertext` with a player key, leaving unmapped letters as they are
pub fn decrypt(ciphertext: &str, key: &PlayerKey) -> String {
    ciphertext
        .chars()
        .map(|c| match Letter::from_char(c).and_then(|cipher| key.get(cipher)) {
            Some(plain) => plain.to_char(),
            None => c,
        })
        .collect()
}
