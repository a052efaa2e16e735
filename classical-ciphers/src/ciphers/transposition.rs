//! Columnar transposition, single and double
//!
//! The "columns" here are round-robin buckets: character `i` goes to bucket
//! `i % key_len`, and the buckets are concatenated in sorted-key order. This is not
//! the same permutation as writing a literal grid and reading its columns.

use crate::cipher::ClassicalCipher;
use crate::error::Result;
use crate::key::ColumnKey;

use super::Ciphers;

impl Ciphers {
    /// Simple transposition encryption
    ///
    /// Every character, letter or not, is moved.
    pub fn transposition_encrypt(plaintext: &str, key: &ColumnKey) -> String {
        let width = key.len();
        let mut buckets: Vec<String> = vec![String::new(); width];

        for (i, c) in plaintext.chars().enumerate() {
            buckets[i % width].push(c);
        }

        key.order()
            .iter()
            .map(|&column| buckets[column].as_str())
            .collect()
    }

    /// Simple transposition decryption
    ///
    /// Bucket sizes differ by at most one: buckets whose index is below
    /// `len % key_len` hold one extra character.
    pub fn transposition_decrypt(ciphertext: &str, key: &ColumnKey) -> String {
        let chars: Vec<char> = ciphertext.chars().collect();
        let width = key.len();
        let short_len = chars.len() / width;
        let long_buckets = chars.len() % width;

        let mut buckets: Vec<&[char]> = vec![&[][..]; width];
        let mut start = 0;
        for &column in key.order() {
            let len = short_len + usize::from(column < long_buckets);
            buckets[column] = &chars[start..start + len];
            start += len;
        }

        (0..chars.len())
            .map(|position| buckets[position % width][position / width])
            .collect()
    }

    /// Double transposition: `first` is applied, then `second`
    pub fn double_transposition_encrypt(
        plaintext: &str,
        first: &ColumnKey,
        second: &ColumnKey,
    ) -> String {
        let first_pass = Self::transposition_encrypt(plaintext, first);
        Self::transposition_encrypt(&first_pass, second)
    }

    /// Double transposition decryption, undoing `second` then `first`
    pub fn double_transposition_decrypt(
        ciphertext: &str,
        first: &ColumnKey,
        second: &ColumnKey,
    ) -> String {
        let first_pass = Self::transposition_decrypt(ciphertext, second);
        Self::transposition_decrypt(&first_pass, first)
    }
}

/// Simple transposition cipher bound to a key
#[derive(Debug, Clone)]
pub struct Transposition {
    key: ColumnKey,
}

impl Transposition {
    pub fn new(key: ColumnKey) -> Self {
        Self { key }
    }
}

impl ClassicalCipher for Transposition {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        Ok(Ciphers::transposition_encrypt(plaintext, &self.key))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        Ok(Ciphers::transposition_decrypt(ciphertext, &self.key))
    }

    fn name(&self) -> &'static str {
        "simple transposition"
    }
}

/// Double transposition cipher bound to two keys
#[derive(Debug, Clone)]
pub struct DoubleTransposition {
    first: ColumnKey,
    second: ColumnKey,
}

impl DoubleTransposition {
    pub fn new(first: ColumnKey, second: ColumnKey) -> Self {
        Self { first, second }
    }
}

impl ClassicalCipher for DoubleTransposition {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        Ok(Ciphers::double_transposition_encrypt(
            plaintext,
            &self.first,
            &self.second,
        ))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        Ok(Ciphers::double_transposition_decrypt(
            ciphertext,
            &self.first,
            &self.second,
        ))
    }

    fn name(&self) -> &'static str {
        "double transposition"
    }
}
