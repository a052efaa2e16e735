//! The 26-letter alphabet: letter/ordinal conversion and letter-only sequences
//!
//! Every cipher and analysis step goes through [`letter_to_index`] and
//! [`index_to_letter`], so shift arithmetic is always done on `0..26` and case is
//! only reapplied when a character is written back out.

use std::fmt;

use crate::error::{CipherError, Result};

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Converts an ASCII letter (either case) to its ordinal, `A`/`a` = 0 ... `Z`/`z` = 25.
///
/// # Errors
///
/// Returns [`CipherError::InvalidInput`] if `ch` is not an ASCII letter.
pub fn letter_to_index(ch: char) -> Result<u8> {
    if ch.is_ascii_alphabetic() {
        Ok(ch.to_ascii_uppercase() as u8 - b'A')
    } else {
        Err(CipherError::InvalidInput(format!(
            "'{}' is not a letter of the alphabet",
            ch.escape_default()
        )))
    }
}

/// Converts an ordinal back to a letter with the same case as `template`.
///
/// Ordinals outside `0..26` wrap around.
pub fn index_to_letter(index: u8, template: char) -> char {
    let base: u8 = if template.is_ascii_lowercase() { b'a' } else { b'A' };
    (base + index % ALPHABET_LEN as u8) as char
}

/// Letters of a text reduced to ordinals, with everything else dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LetterSequence {
    indices: Vec<u8>,
}

impl LetterSequence {
    /// Extracts the letters of `text`, folding case and dropping all other characters.
    pub fn from_text(text: &str) -> Self {
        let indices = text
            .chars()
            .filter_map(|c| letter_to_index(c).ok())
            .collect();
        Self { indices }
    }

    /// Builds a sequence from ordinals. Values outside `0..26` are wrapped.
    pub fn from_indices(indices: impl IntoIterator<Item = u8>) -> Self {
        Self {
            indices: indices
                .into_iter()
                .map(|i| i % ALPHABET_LEN as u8)
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Letter counts, A-Z.
    pub fn counts(&self) -> [u32; ALPHABET_LEN] {
        let mut counts = [0u32; ALPHABET_LEN];
        for &index in &self.indices {
            counts[index as usize] += 1;
        }
        counts
    }

    /// Splits the sequence into `count` interleaved columns; letter `i` lands in
    /// column `i % count`. Columns may be empty when `count` exceeds the length.
    pub fn columns(&self, count: usize) -> Vec<LetterSequence> {
        let mut columns = vec![LetterSequence::default(); count];
        if count == 0 {
            return columns;
        }

        for (i, &index) in self.indices.iter().enumerate() {
            columns[i % count].indices.push(index);
        }

        columns
    }

    /// All n-grams in order of their starting position.
    pub fn windows(&self, n: usize) -> impl Iterator<Item = &[u8]> {
        // `slice::windows` panics on 0
        self.indices.windows(n.max(1)).filter(move |_| n > 0)
    }
}

impl fmt::Display for LetterSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &index in &self.indices {
            write!(f, "{}", index_to_letter(index, 'A'))?;
        }
        Ok(())
    }
}
