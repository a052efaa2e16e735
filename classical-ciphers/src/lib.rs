//! # Classical Ciphers Library
//!
//! Pen-and-paper ciphers and the statistics used to break the Vigenère cipher.
//!
//! ## Supported Ciphers
//!
//! - **Vigenère** - polyalphabetic substitution with a repeating key
//! - **Simple transposition** - round-robin columnar transposition
//! - **Double transposition** - two simple transpositions with separate keys
//! - **Table** - write rows into a grid, read columns in key order
//! - **Combined** - Vigenère followed by the table cipher
//!
//! ## Cryptanalysis
//!
//! - Index of coincidence and the Friedman key length estimate
//! - Kasiski examination (factor votes over repeated trigram distances)
//! - Per-column frequency analysis to recover a key of known length
//! - Candidate selection over the lengths around the Friedman estimate
//!
//! ## Usage
//!
//! ```rust
//! use classical_ciphers::{analysis, sample::WILDE_PREFACE, Ciphers, VigenereKey};
//!
//! let key = VigenereKey::new("CRYPTOGRAPHY")?;
//! let ciphertext = Ciphers::vigenere_encrypt(WILDE_PREFACE, &key);
//!
//! let best = analysis::select_key(&ciphertext)?;
//! assert_eq!(best.key, key);
//! assert_eq!(best.plaintext, WILDE_PREFACE);
//! # Ok::<(), classical_ciphers::CipherError>(())
//! ```
//!
//! All functions are pure and synchronous. Shift arithmetic is done on letter
//! ordinals only; case and non-letter characters are carried through unchanged.

// Public modules
pub mod alphabet;
pub mod analysis;
pub mod cipher;
pub mod ciphers;
pub mod error;
pub mod key;
pub mod sample;
pub mod utils;

// Re-exports for easy access
pub use analysis::{analyze, AnalysisConfig, CryptanalysisReport};
pub use cipher::ClassicalCipher;
pub use ciphers::{CombinedCipher, Ciphers, DoubleTransposition, TableCipher, Transposition, Vigenere};
pub use error::{CipherError, Result};
pub use key::{ColumnKey, VigenereKey};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Cipher kinds available through [`Ciphers::build`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    Vigenere,
    Transposition,
    DoubleTransposition,
    Table,
    Combined,
}

impl CipherKind {
    pub const ALL: [CipherKind; 5] = [
        CipherKind::Vigenere,
        CipherKind::Transposition,
        CipherKind::DoubleTransposition,
        CipherKind::Table,
        CipherKind::Combined,
    ];

    /// Whether the cipher needs a second key
    pub fn needs_second_key(self) -> bool {
        matches!(self, CipherKind::DoubleTransposition | CipherKind::Combined)
    }
}

/// Convenience functions for common operations
impl Ciphers {
    /// Get version information
    pub fn version() -> &'static str {
        VERSION
    }

    /// Builds a keyed cipher from key strings.
    ///
    /// `second_key` is the second transposition key for
    /// [`CipherKind::DoubleTransposition`] and the table key for
    /// [`CipherKind::Combined`]; other kinds ignore it.
    ///
    /// # Errors
    ///
    /// [`CipherError::InvalidKey`] if a key is malformed or a required second key
    /// is missing.
    pub fn build(
        kind: CipherKind,
        key: &str,
        second_key: Option<&str>,
    ) -> Result<Box<dyn ClassicalCipher>> {
        let second = || {
            second_key.ok_or_else(|| {
                CipherError::InvalidKey(format!("{kind:?} cipher needs a second key"))
            })
        };

        let cipher: Box<dyn ClassicalCipher> = match kind {
            CipherKind::Vigenere => Box::new(Vigenere::new(key.parse()?)),
            CipherKind::Transposition => Box::new(Transposition::new(key.parse()?)),
            CipherKind::DoubleTransposition => {
                Box::new(DoubleTransposition::new(key.parse()?, second()?.parse()?))
            }
            CipherKind::Table => Box::new(TableCipher::new(key.parse()?)),
            CipherKind::Combined => Box::new(CombinedCipher::new(key.parse()?, second()?.parse()?)),
        };

        Ok(cipher)
    }
}
