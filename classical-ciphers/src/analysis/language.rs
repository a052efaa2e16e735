//! Letter frequency models

use std::fmt;
use std::str::FromStr;

use crate::alphabet::ALPHABET_LEN;
use crate::error::CipherError;

/// English letter frequencies, A-Z
const ENGLISH_FREQUENCIES: [f64; ALPHABET_LEN] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094,
    0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929,
    0.00095, 0.05987, 0.06327, 0.09056, 0.02758, 0.00978, 0.02360, 0.00150,
    0.01974, 0.00074,
];

/// German letter frequencies, A-Z
const GERMAN_FREQUENCIES: [f64; ALPHABET_LEN] = [
    0.0558, 0.0196, 0.0316, 0.0498, 0.1693, 0.0149, 0.0302, 0.0498,
    0.0802, 0.0024, 0.0132, 0.0360, 0.0255, 0.1053, 0.0224, 0.0067,
    0.0002, 0.0689, 0.0642, 0.0579, 0.0383, 0.0084, 0.0178, 0.0005,
    0.0005, 0.0121,
];

/// Relative frequency of each letter, A-Z
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyProfile {
    frequencies: [f64; ALPHABET_LEN],
}

impl FrequencyProfile {
    pub const fn new(frequencies: [f64; ALPHABET_LEN]) -> Self {
        Self { frequencies }
    }

    /// Normalizes letter counts. All-zero counts give an all-zero profile.
    pub fn from_counts(counts: &[u32; ALPHABET_LEN]) -> Self {
        let total: u32 = counts.iter().sum();
        let mut frequencies = [0.0; ALPHABET_LEN];
        if total > 0 {
            for (frequency, &count) in frequencies.iter_mut().zip(counts) {
                *frequency = f64::from(count) / f64::from(total);
            }
        }
        Self { frequencies }
    }

    pub fn frequency(&self, index: usize) -> f64 {
        self.frequencies[index]
    }

    pub fn frequencies(&self) -> &[f64; ALPHABET_LEN] {
        &self.frequencies
    }

    /// Sum of absolute per-letter differences.
    pub fn l1_distance(&self, other: &FrequencyProfile) -> f64 {
        self.frequencies
            .iter()
            .zip(&other.frequencies)
            .map(|(a, b)| (a - b).abs())
            .sum()
    }
}

/// Reference language whose letter distribution a correct decryption should match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    German,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::German];

    pub fn profile(self) -> FrequencyProfile {
        match self {
            Language::English => FrequencyProfile::new(ENGLISH_FREQUENCIES),
            Language::German => FrequencyProfile::new(GERMAN_FREQUENCIES),
        }
    }
}

impl FromStr for Language {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "german" | "de" => Ok(Language::German),
            other => Err(CipherError::InvalidInput(format!(
                "Unknown language '{other}' (expected english or german)"
            ))),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => f.write_str("english"),
            Language::German => f.write_str("german"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_tables_sum_to_one() {
        for language in Language::ALL {
            let total: f64 = language.profile().frequencies().iter().sum();
            assert!((total - 1.0).abs() < 0.025, "{language}: {total}");
        }
    }

    #[test]
    fn test_from_counts() {
        let mut counts = [0u32; ALPHABET_LEN];
        counts[0] = 3;
        counts[4] = 1;
        let profile = FrequencyProfile::from_counts(&counts);
        assert_eq!(profile.frequency(0), 0.75);
        assert_eq!(profile.frequency(4), 0.25);

        let empty = FrequencyProfile::from_counts(&[0; ALPHABET_LEN]);
        assert!(empty.frequencies().iter().all(|&f| f == 0.0));
    }

    #[test]
    fn test_l1_distance() {
        let english = Language::English.profile();
        assert_eq!(english.l1_distance(&english), 0.0);
        let empty = FrequencyProfile::from_counts(&[0; ALPHABET_LEN]);
        assert!((english.l1_distance(&empty) - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_parse_language() {
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert_eq!("de".parse::<Language>().unwrap(), Language::German);
        assert!("klingon".parse::<Language>().is_err());
    }
}
