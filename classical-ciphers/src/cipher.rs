//! Generic classical cipher trait

use crate::error::Result;

/// Trait for a keyed classical cipher over text
///
/// Implementations are deterministic and keep no state between calls.
pub trait ClassicalCipher {
    /// Encrypts a whole text
    fn encrypt(&self, plaintext: &str) -> Result<String>;

    /// Decrypts a whole text
    fn decrypt(&self, ciphertext: &str) -> Result<String>;

    /// Short human-readable name of the cipher
    fn name(&self) -> &'static str;
}
