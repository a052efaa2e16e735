//! Vigenère cipher

use crate::alphabet::{self, ALPHABET_LEN};
use crate::cipher::ClassicalCipher;
use crate::error::Result;
use crate::key::VigenereKey;

use super::Ciphers;

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

impl Ciphers {
    /// Vigenère encryption
    ///
    /// Letters are shifted by the key letter at the current key position; case is
    /// preserved. All other characters pass through unchanged and do not advance
    /// the key position.
    pub fn vigenere_encrypt(plaintext: &str, key: &VigenereKey) -> String {
        Self::vigenere_apply(plaintext, key, Direction::Encrypt)
    }

    /// Vigenère decryption, the exact inverse of [`Ciphers::vigenere_encrypt`]
    pub fn vigenere_decrypt(ciphertext: &str, key: &VigenereKey) -> String {
        Self::vigenere_apply(ciphertext, key, Direction::Decrypt)
    }

    fn vigenere_apply(content: &str, key: &VigenereKey, direction: Direction) -> String {
        let mut key_index: usize = 0;

        content
            .chars()
            .map(|c| match alphabet::letter_to_index(c) {
                Ok(index) => {
                    let shift = key.shift_at(key_index);
                    key_index += 1;

                    let shifted = match direction {
                        Direction::Encrypt => (index + shift) % ALPHABET_LEN as u8,
                        Direction::Decrypt => (index + ALPHABET_LEN as u8 - shift) % ALPHABET_LEN as u8,
                    };
                    alphabet::index_to_letter(shifted, c)
                }
                Err(_) => c,
            })
            .collect()
    }
}

/// Vigenère cipher bound to a key
#[derive(Debug, Clone)]
pub struct Vigenere {
    key: VigenereKey,
}

impl Vigenere {
    pub fn new(key: VigenereKey) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &VigenereKey {
        &self.key
    }
}

impl ClassicalCipher for Vigenere {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        Ok(Ciphers::vigenere_encrypt(plaintext, &self.key))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        Ok(Ciphers::vigenere_decrypt(ciphertext, &self.key))
    }

    fn name(&self) -> &'static str {
        "Vigenère"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::WILDE_PREFACE;

    fn key(s: &str) -> VigenereKey {
        VigenereKey::new(s).unwrap()
    }

    #[test]
    fn test_encrypt() {
        assert_eq!(Ciphers::vigenere_encrypt("HELLO", &key("KEY")), "RIJVS");
        assert_eq!(
            Ciphers::vigenere_encrypt("ATTACKATDAWN", &key("LEMON")),
            "LXFOPVEFRNHR"
        );
    }

    #[test]
    fn test_decrypt() {
        assert_eq!(Ciphers::vigenere_decrypt("RIJVS", &key("KEY")), "HELLO");
    }

    #[test]
    fn test_preserves_case_and_punctuation() {
        let encrypted = Ciphers::vigenere_encrypt("Hello, World!", &key("key"));
        assert_eq!(encrypted, "Rijvs, Uyvjn!");

        for (plain, cipher) in "Hello, World!".chars().zip(encrypted.chars()) {
            assert_eq!(plain.is_ascii_alphabetic(), cipher.is_ascii_alphabetic());
            assert_eq!(plain.is_ascii_lowercase(), cipher.is_ascii_lowercase());
            if !plain.is_ascii_alphabetic() {
                assert_eq!(plain, cipher);
            }
        }
    }

    #[test]
    fn test_non_letters_do_not_consume_key() {
        let spaced = Ciphers::vigenere_encrypt("A A A", &key("BC"));
        assert_eq!(spaced, "B C B");
    }

    #[test]
    fn test_round_trip() {
        for k in ["A", "CRYPTOGRAPHY", "zebra", "Q"] {
            let k = key(k);
            let encrypted = Ciphers::vigenere_encrypt(WILDE_PREFACE, &k);
            assert_eq!(Ciphers::vigenere_decrypt(&encrypted, &k), WILDE_PREFACE);
        }
    }

    #[test]
    fn test_non_ascii_passes_through() {
        let k = key("KEY");
        let encrypted = Ciphers::vigenere_encrypt("Grüße", &k);
        assert!(encrypted.contains('ü'));
        assert_eq!(Ciphers::vigenere_decrypt(&encrypted, &k), "Grüße");
    }

    #[test]
    fn test_trait_object() {
        let cipher: Box<dyn ClassicalCipher> = Box::new(Vigenere::new(key("KEY")));
        assert_eq!(cipher.encrypt("HELLO").unwrap(), "RIJVS");
        assert_eq!(cipher.decrypt("RIJVS").unwrap(), "HELLO");
        assert_eq!(cipher.name(), "Vigenère");
    }
}
