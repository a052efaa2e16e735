//! Vigenère substitution followed by a table transposition

use crate::cipher::ClassicalCipher;
use crate::error::Result;
use crate::key::{ColumnKey, VigenereKey};

use super::Ciphers;

impl Ciphers {
    /// Combined encryption: Vigenère, then table cipher
    pub fn combined_encrypt(
        plaintext: &str,
        vigenere_key: &VigenereKey,
        table_key: &ColumnKey,
    ) -> String {
        let substituted = Self::vigenere_encrypt(plaintext, vigenere_key);
        Self::table_encrypt(&substituted, table_key)
    }

    /// Combined decryption: table cipher, then Vigenère
    pub fn combined_decrypt(
        ciphertext: &str,
        vigenere_key: &VigenereKey,
        table_key: &ColumnKey,
    ) -> Result<String> {
        let transposed = Self::table_decrypt(ciphertext, table_key)?;
        Ok(Self::vigenere_decrypt(&transposed, vigenere_key))
    }
}

/// Two-stage cipher bound to a Vigenère key and a table key
#[derive(Debug, Clone)]
pub struct CombinedCipher {
    vigenere_key: VigenereKey,
    table_key: ColumnKey,
}

impl CombinedCipher {
    pub fn new(vigenere_key: VigenereKey, table_key: ColumnKey) -> Self {
        Self {
            vigenere_key,
            table_key,
        }
    }
}

impl ClassicalCipher for CombinedCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        Ok(Ciphers::combined_encrypt(
            plaintext,
            &self.vigenere_key,
            &self.table_key,
        ))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        Ciphers::combined_decrypt(ciphertext, &self.vigenere_key, &self.table_key)
    }

    fn name(&self) -> &'static str {
        "combined Vigenère + table"
    }
}
