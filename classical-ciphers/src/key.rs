//! Validated cipher keys

use std::fmt;
use std::str::FromStr;

use crate::alphabet::{self, LetterSequence};
use crate::error::{CipherError, Result};

fn parse_letters(key: &str) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(CipherError::InvalidKey("Key cannot be empty".to_string()));
    }

    key.chars()
        .map(|c| {
            alphabet::letter_to_index(c).map_err(|_| {
                CipherError::InvalidKey(format!(
                    "Key may only contain letters, found '{}'",
                    c.escape_default()
                ))
            })
        })
        .collect()
}

/// Repeating shift key for the Vigenère cipher.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VigenereKey {
    shifts: Vec<u8>,
}

impl VigenereKey {
    /// Parses a letter key; case is ignored.
    ///
    /// # Errors
    ///
    /// [`CipherError::InvalidKey`] if the key is empty or contains a non-letter.
    pub fn new(key: &str) -> Result<Self> {
        Ok(Self {
            shifts: parse_letters(key)?,
        })
    }

    /// Builds a key from shift values (0 = 'A'). Values wrap modulo 26.
    pub fn from_shifts(shifts: impl IntoIterator<Item = u8>) -> Result<Self> {
        let shifts: Vec<u8> = LetterSequence::from_indices(shifts).indices().to_vec();
        if shifts.is_empty() {
            return Err(CipherError::InvalidKey("Key cannot be empty".to_string()));
        }
        Ok(Self { shifts })
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Returns true if the key has no letters.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    pub fn shifts(&self) -> &[u8] {
        &self.shifts
    }

    /// Shift applied to the `position`-th letter of a text.
    pub fn shift_at(&self, position: usize) -> u8 {
        self.shifts[position % self.shifts.len()]
    }
}

impl FromStr for VigenereKey {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for VigenereKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &shift in &self.shifts {
            write!(f, "{}", alphabet::index_to_letter(shift, 'A'))?;
        }
        Ok(())
    }
}

/// Key for the transposition and table ciphers.
///
/// Only the relative order of the key letters matters: columns are read out in the
/// order obtained by a stable sort of the key letters, so repeated letters keep
/// their original left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnKey {
    text: String,
    order: Vec<usize>,
}

impl ColumnKey {
    /// Parses a letter key; letters are compared case-insensitively.
    ///
    /// # Errors
    ///
    /// [`CipherError::InvalidKey`] if the key is empty or contains a non-letter.
    pub fn new(key: &str) -> Result<Self> {
        let letters = parse_letters(key)?;
        let mut order: Vec<usize> = (0..letters.len()).collect();
        order.sort_by_key(|&position| letters[position]);

        Ok(Self {
            text: key.to_string(),
            order,
        })
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the key has no letters.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Column indices in read-out order. A permutation of `0..len()`.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for ColumnKey {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vigenere_key_parsing() {
        let key = VigenereKey::new("Key").unwrap();
        assert_eq!(key.shifts(), &[10, 4, 24]);
        assert_eq!(key.to_string(), "KEY");
        assert_eq!(key.shift_at(4), 4);
    }

    #[test]
    fn test_empty_keys_rejected() {
        assert!(matches!(VigenereKey::new(""), Err(CipherError::InvalidKey(_))));
        assert!(matches!(ColumnKey::new(""), Err(CipherError::InvalidKey(_))));
        assert!(matches!(
            VigenereKey::from_shifts(Vec::new()),
            Err(CipherError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_non_letter_keys_rejected() {
        assert!(matches!(VigenereKey::new("AB1"), Err(CipherError::InvalidKey(_))));
        assert!(matches!("SE CRET".parse::<ColumnKey>(), Err(CipherError::InvalidKey(_))));
    }

    #[test]
    fn test_from_shifts_wraps() {
        let key = VigenereKey::from_shifts([0, 25, 26]).unwrap();
        assert_eq!(key.to_string(), "AZA");
    }

    #[test]
    fn test_keys_are_never_empty() {
        let key = VigenereKey::new("A").unwrap();
        assert_eq!(key.len(), 1);
        assert!(!key.is_empty());

        let columns = ColumnKey::new("SECRET").unwrap();
        assert_eq!(columns.len(), 6);
        assert!(!columns.is_empty());
    }

    #[test]
    fn test_column_order_is_stable_sort() {
        assert_eq!(ColumnKey::new("KEY").unwrap().order(), &[1, 0, 2]);
        // Repeated letters keep their original order
        assert_eq!(ColumnKey::new("SECRET").unwrap().order(), &[2, 1, 4, 3, 0, 5]);
        assert_eq!(ColumnKey::new("aAa").unwrap().order(), &[0, 1, 2]);
    }

    #[test]
    fn test_column_order_is_permutation() {
        let key = ColumnKey::new("CRYPTOGRAPHY").unwrap();
        let mut order = key.order().to_vec();
        order.sort_unstable();
        assert_eq!(order, (0..12).collect::<Vec<_>>());
    }
}
