//! Table (grid) cipher

use crate::cipher::ClassicalCipher;
use crate::error::{CipherError, Result};
use crate::key::ColumnKey;
use crate::utils;

use super::Ciphers;

impl Ciphers {
    /// Table cipher encryption
    ///
    /// The text is right-padded with spaces to a multiple of the key length and
    /// written row by row into a grid with one column per key letter. Columns are
    /// read top to bottom in sorted-key order.
    pub fn table_encrypt(plaintext: &str, key: &ColumnKey) -> String {
        let width = key.len();
        let grid = utils::add_padding(&plaintext.chars().collect::<Vec<char>>(), width);
        let rows = grid.len() / width;

        let mut ciphertext = String::with_capacity(grid.len());
        for &column in key.order() {
            ciphertext.extend((0..rows).map(|row| grid[row * width + column]));
        }

        ciphertext
    }

    /// Table cipher decryption
    ///
    /// Trailing whitespace is stripped from the result, so a plaintext that itself
    /// ended in whitespace does not round-trip exactly.
    ///
    /// # Errors
    ///
    /// [`CipherError::InvalidInput`] if the ciphertext length is not a multiple of
    /// the key length.
    pub fn table_decrypt(ciphertext: &str, key: &ColumnKey) -> Result<String> {
        let chars: Vec<char> = ciphertext.chars().collect();
        let width = key.len();

        if chars.len() % width != 0 {
            return Err(CipherError::InvalidInput(format!(
                "Table ciphertext length {} is not a multiple of the key length {}",
                chars.len(),
                width
            )));
        }

        let rows = chars.len() / width;
        if rows == 0 {
            return Ok(String::new());
        }

        let mut grid = vec![utils::PADDING; chars.len()];
        for (chunk, &column) in chars.chunks(rows).zip(key.order()) {
            for (row, &c) in chunk.iter().enumerate() {
                grid[row * width + column] = c;
            }
        }

        let plaintext: String = grid.into_iter().collect();
        Ok(utils::remove_padding(&plaintext).to_string())
    }
}

/// Table cipher bound to a key
#[derive(Debug, Clone)]
pub struct TableCipher {
    key: ColumnKey,
}

impl TableCipher {
    pub fn new(key: ColumnKey) -> Self {
        Self { key }
    }
}

impl ClassicalCipher for TableCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        Ok(Ciphers::table_encrypt(plaintext, &self.key))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        Ciphers::table_decrypt(ciphertext, &self.key)
    }

    fn name(&self) -> &'static str {
        "table"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::WILDE_PREFACE;

    fn key(s: &str) -> ColumnKey {
        ColumnKey::new(s).unwrap()
    }

    #[test]
    fn test_encrypt_pads_and_reads_columns() {
        let encrypted = Ciphers::table_encrypt("HELLOWORLD", &key("KEY"));
        assert_eq!(encrypted, "EOR HLODLWL ");
        assert_eq!(
            Ciphers::table_decrypt(&encrypted, &key("KEY")).unwrap(),
            "HELLOWORLD"
        );
    }

    #[test]
    fn test_exact_multiple_is_not_padded() {
        let encrypted = Ciphers::table_encrypt("ABCDEF", &key("BA"));
        assert_eq!(encrypted, "BDFACE");
    }

    #[test]
    fn test_matrix_round_trip_strips_right() {
        let k = key("MATRIX");
        for text in [WILDE_PREFACE, "short", "trailing spaces   ", "", "in  ner"] {
            let encrypted = Ciphers::table_encrypt(text, &k);
            assert_eq!(encrypted.chars().count() % k.len(), 0);
            assert_eq!(Ciphers::table_decrypt(&encrypted, &k).unwrap(), text.trim_end());
        }
    }

    #[test]
    fn test_key_longer_than_text() {
        let k = key("CRYPTOGRAPHY");
        let encrypted = Ciphers::table_encrypt("HI", &k);
        assert_eq!(encrypted.len(), 12);
        assert_eq!(Ciphers::table_decrypt(&encrypted, &k).unwrap(), "HI");
    }

    #[test]
    fn test_empty_ciphertext_has_zero_rows() {
        assert_eq!(Ciphers::table_decrypt("", &key("MATRIX")).unwrap(), "");
    }

    #[test]
    fn test_ragged_ciphertext_rejected() {
        let result = Ciphers::table_decrypt("ABCDE", &key("MATRIX"));
        assert!(matches!(result, Err(CipherError::InvalidInput(_))));
    }
}
