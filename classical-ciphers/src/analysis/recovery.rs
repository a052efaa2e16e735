//! Vigenère key recovery for a known key length
//!
//! Once the key length is fixed, each interleaved column of the ciphertext is a
//! single Caesar shift. The shift whose decryption best matches the reference
//! letter distribution is taken as that column's key letter.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::alphabet::{LetterSequence, ALPHABET_LEN};
use crate::error::{CipherError, Result};
use crate::key::VigenereKey;

use super::language::{FrequencyProfile, Language};

/// How far a decrypted column's letter counts are from the reference language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShiftMetric {
    /// Sum of absolute differences between observed and reference frequencies
    #[default]
    L1Distance,
    /// Pearson chi-squared of observed against expected counts
    ChiSquared,
}

impl ShiftMetric {
    /// Deviation of `counts` from `reference`; lower is a better match.
    pub fn deviation(self, counts: &[u32; ALPHABET_LEN], reference: &FrequencyProfile) -> f64 {
        match self {
            ShiftMetric::L1Distance => FrequencyProfile::from_counts(counts).l1_distance(reference),
            ShiftMetric::ChiSquared => {
                let total: f64 = counts.iter().map(|&c| f64::from(c)).sum();
                counts
                    .iter()
                    .zip(reference.frequencies())
                    .map(|(&observed, &frequency)| (f64::from(observed), frequency * total))
                    .filter(|&(_, expected)| expected > 0.0)
                    .map(|(observed, expected)| (observed - expected).powi(2) / expected)
                    .sum()
            }
        }
    }
}

impl FromStr for ShiftMetric {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "l1" | "l1-distance" => Ok(ShiftMetric::L1Distance),
            "chi" | "chi-squared" => Ok(ShiftMetric::ChiSquared),
            other => Err(CipherError::InvalidInput(format!(
                "Unknown metric '{other}' (expected l1 or chi-squared)"
            ))),
        }
    }
}

impl fmt::Display for ShiftMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftMetric::L1Distance => f.write_str("l1"),
            ShiftMetric::ChiSquared => f.write_str("chi-squared"),
        }
    }
}

/// Finds the Caesar shift of one column.
///
/// Tries all 26 shifts and keeps the one with the lowest deviation; on ties the
/// smallest shift wins. An empty column yields shift 0.
pub fn column_shift(column: &LetterSequence, language: Language, metric: ShiftMetric) -> u8 {
    if column.is_empty() {
        return 0;
    }

    let counts = column.counts();
    let reference = language.profile();
    let mut best_shift: usize = 0;
    let mut best_deviation = f64::INFINITY;

    for shift in 0..ALPHABET_LEN {
        // plaintext letter i was enciphered as (i + shift) mod 26
        let decrypted: [u32; ALPHABET_LEN] =
            std::array::from_fn(|i| counts[(i + shift) % ALPHABET_LEN]);
        let deviation = metric.deviation(&decrypted, &reference);

        if deviation < best_deviation {
            best_deviation = deviation;
            best_shift = shift;
        }
    }

    trace!(letters = column.len(), shift = best_shift, deviation = best_deviation, "column shift");
    best_shift as u8
}

/// Recovers a key of `key_len` letters, scoring columns against English with the
/// L1 distance.
pub fn recover_key(ciphertext: &str, key_len: usize) -> Result<VigenereKey> {
    recover_key_with(ciphertext, key_len, Language::English, ShiftMetric::L1Distance)
}

/// Recovers a key of `key_len` letters with the given language model and metric.
///
/// Non-letters in `ciphertext` are ignored. Columns left empty because the key is
/// longer than the text get shift 0 ('A').
///
/// # Errors
///
/// [`CipherError::InvalidKey`] if `key_len` is 0.
pub fn recover_key_with(
    ciphertext: &str,
    key_len: usize,
    language: Language,
    metric: ShiftMetric,
) -> Result<VigenereKey> {
    recover_from_letters(&LetterSequence::from_text(ciphertext), key_len, language, metric)
}

pub(crate) fn recover_from_letters(
    letters: &LetterSequence,
    key_len: usize,
    language: Language,
    metric: ShiftMetric,
) -> Result<VigenereKey> {
    if key_len == 0 {
        return Err(CipherError::InvalidKey(
            "Key length must be at least 1".to_string(),
        ));
    }

    let shifts: Vec<u8> = letters
        .columns(key_len)
        .iter()
        .map(|column| column_shift(column, language, metric))
        .collect();

    VigenereKey::from_shifts(shifts)
}
