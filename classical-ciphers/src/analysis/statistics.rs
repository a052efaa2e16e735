//! Index of coincidence and key length estimates

use crate::alphabet::{LetterSequence, ALPHABET_LEN};

/// IC of uniformly random letters, 1/26.
pub const RANDOM_IC: f64 = 0.0385;

/// Numerator constant of the Friedman estimate.
pub const FRIEDMAN_KAPPA: f64 = 0.0279;

/// Calculates the Index of Coincidence (IC) for the given text.
///
/// Only letters are counted, case-insensitively.
///
/// # Returns
///
/// The Index of Coincidence value (0.0 if text has < 2 letters).
pub fn index_of_coincidence(text: &str) -> f64 {
    sequence_ic(&LetterSequence::from_text(text))
}

/// Index of Coincidence over an already extracted letter sequence.
pub fn sequence_ic(letters: &LetterSequence) -> f64 {
    ic_from_counts(&letters.counts())
}

fn ic_from_counts(counts: &[u32; ALPHABET_LEN]) -> f64 {
    let total: u64 = counts.iter().map(|&c| u64::from(c)).sum();

    if total < 2 {
        return 0.0;
    }

    // sum of (frequency_i * (frequency_i - 1)) / (total * (total - 1))
    let numerator: u64 = counts
        .iter()
        .map(|&c| u64::from(c) * u64::from(c.saturating_sub(1)))
        .sum();

    numerator as f64 / (total * (total - 1)) as f64
}

/// Friedman estimate of the Vigenère key length.
///
/// `K = 0.0279 / (IC - 0.0385) + 1`. Returns 1.0 when the IC is not positive or
/// equals the random-text IC, since the formula has no usable answer there. The
/// result is not clamped and can be below 1 for near-random text.
pub fn friedman_estimate(text: &str) -> f64 {
    friedman_from_ic(index_of_coincidence(text))
}

/// Friedman estimate for a precomputed IC.
pub fn friedman_from_ic(ic: f64) -> f64 {
    let excess = ic - RANDOM_IC;
    if ic <= 0.0 || excess.abs() < f64::EPSILON {
        return 1.0;
    }

    FRIEDMAN_KAPPA / excess + 1.0
}

/// Mean IC of the `key_len` interleaved columns of `letters`.
///
/// Columns with fewer than two letters are left out; 0.0 if no column qualifies.
pub fn average_column_ic(letters: &LetterSequence, key_len: usize) -> f64 {
    let (total, columns) = letters
        .columns(key_len)
        .iter()
        .filter(|column| column.len() >= 2)
        .fold((0.0, 0usize), |(total, columns), column| {
            (total + sequence_ic(column), columns + 1)
        });

    if columns == 0 {
        0.0
    } else {
        total / columns as f64
    }
}

/// Ranks key lengths `1..=max_len` by average column IC, highest first.
///
/// With the right key length every column is a plain Caesar shift of the
/// plaintext and carries the language's IC. Lengths whose columns show no
/// coincidence at all are skipped; ties keep the shorter length first.
pub fn rank_key_lengths_by_ic(text: &str, max_len: usize) -> Vec<(usize, f64)> {
    rank_letters_by_ic(&LetterSequence::from_text(text), max_len)
}

pub(crate) fn rank_letters_by_ic(letters: &LetterSequence, max_len: usize) -> Vec<(usize, f64)> {
    let mut ranking: Vec<(usize, f64)> = (1..=max_len)
        .map(|len| (len, average_column_ic(letters, len)))
        .filter(|&(_, ic)| ic > 0.0)
        .collect();

    ranking.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ciphers::Ciphers;
    use crate::key::VigenereKey;
    use crate::sample::WILDE_PREFACE;

    fn encrypted_preface(key: &str) -> String {
        Ciphers::vigenere_encrypt(WILDE_PREFACE, &VigenereKey::new(key).unwrap())
    }

    #[test]
    fn test_ic_uniform_alphabet() {
        let ic = index_of_coincidence("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(ic, 0.0);
    }

    #[test]
    fn test_ic_known_value() {
        // 2 A's and 2 B's: (2 + 2) / (4 * 3)
        let ic = index_of_coincidence("a, A b-B");
        assert!((ic - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(index_of_coincidence("zzzz"), 1.0);
    }

    #[test]
    fn test_ic_degenerate_input() {
        assert_eq!(index_of_coincidence(""), 0.0);
        assert_eq!(index_of_coincidence("A"), 0.0);
        assert_eq!(index_of_coincidence("1234 !!"), 0.0);
    }

    #[test]
    fn test_ic_bounds() {
        for text in [WILDE_PREFACE, "QQQQ", "AB", "The quick brown fox"] {
            let ic = index_of_coincidence(text);
            assert!((0.0..=1.0).contains(&ic), "{text}: {ic}");
        }
    }

    #[test]
    fn test_ic_of_large_uniform_text_approaches_random() {
        let text: String = "ABCDEFGHIJKLMNOPQRSTUVWXYZ".repeat(400);
        let ic = index_of_coincidence(&text);
        assert!((ic - 1.0 / 26.0).abs() < 0.001, "{ic}");
    }

    #[test]
    fn test_english_ic_higher_than_ciphertext() {
        let plain = index_of_coincidence(WILDE_PREFACE);
        let cipher = index_of_coincidence(&encrypted_preface("CRYPTOGRAPHY"));
        assert!(plain > 0.06, "{plain}");
        assert!(cipher < plain);
    }

    #[test]
    fn test_friedman_sentinels() {
        assert_eq!(friedman_from_ic(0.0), 1.0);
        assert_eq!(friedman_from_ic(-0.5), 1.0);
        assert_eq!(friedman_from_ic(RANDOM_IC), 1.0);
        assert_eq!(friedman_estimate(""), 1.0);
    }

    #[test]
    fn test_friedman_formula() {
        let estimate = friedman_from_ic(RANDOM_IC + FRIEDMAN_KAPPA / 4.0);
        assert!((estimate - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_friedman_estimate_near_key_length() {
        let estimate = friedman_estimate(&encrypted_preface("CRYPTOGRAPHY"));
        assert!((estimate.round() - 12.0).abs() <= 3.0, "{estimate}");
    }

    #[test]
    fn test_average_column_ic_peaks_at_key_length() {
        let letters = LetterSequence::from_text(&encrypted_preface("LEMON"));
        let right = average_column_ic(&letters, 5);
        let wrong = average_column_ic(&letters, 4);
        assert!(right > 0.06, "{right}");
        assert!(right > wrong);
        assert_eq!(average_column_ic(&LetterSequence::from_text("AB"), 4), 0.0);
    }

    #[test]
    fn test_rank_key_lengths_by_ic() {
        let ranking = rank_key_lengths_by_ic(&encrypted_preface("LEMON"), 12);
        let top: Vec<usize> = ranking.iter().take(2).map(|&(len, _)| len).collect();
        assert!(top.contains(&5) || top.contains(&10), "{ranking:?}");
        assert!(rank_key_lengths_by_ic("", 5).is_empty());
    }
}
