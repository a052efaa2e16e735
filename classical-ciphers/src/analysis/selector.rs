//! Candidate key selection around the Friedman estimate

use std::ops::Range;

use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::alphabet::LetterSequence;
use crate::ciphers::Ciphers;
use crate::error::{CipherError, Result};
use crate::key::VigenereKey;

use super::recovery::recover_from_letters;
use super::statistics::friedman_estimate;
use super::AnalysisConfig;

/// A recovered key, the text it decrypts to and that text's score
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub key: VigenereKey,
    pub plaintext: String,
    pub score: f64,
}

/// Cheap English-likelihood score: spaces plus half the vowels (AEIOU, any case).
pub fn plaintext_score(text: &str) -> f64 {
    let spaces = text.chars().filter(|&c| c == ' ').count();
    let vowels = text
        .chars()
        .filter(|c| matches!(c.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U'))
        .count();

    spaces as f64 + 0.5 * vowels as f64
}

/// Key lengths tried for a Friedman estimate.
///
/// The estimate is rounded and kept within `1..max_key_len`, then the window
/// `[estimate - window_below, estimate + window_above)` is cut to
/// `1..max_key_len`. Never empty for a valid config.
pub fn candidate_window(estimate: f64, config: &AnalysisConfig) -> Range<usize> {
    let upper_limit = config.max_key_len.max(2);
    let approx = (estimate.round().max(1.0) as usize).min(upper_limit - 1);

    let start = approx.saturating_sub(config.window_below).max(1);
    let end = approx
        .saturating_add(config.window_above)
        .min(upper_limit)
        .max(approx + 1);
    start..end
}

/// Picks the best key with the default configuration.
pub fn select_key(ciphertext: &str) -> Result<Candidate> {
    select_key_with(ciphertext, &AnalysisConfig::default())
}

/// Tries every key length in the window around the Friedman estimate and keeps
/// the candidate whose decryption scores highest.
///
/// Ties go to the shorter key length. This is a heuristic: the winner is the most
/// plausible key in the window, not necessarily the right one.
pub fn select_key_with(ciphertext: &str, config: &AnalysisConfig) -> Result<Candidate> {
    config.validate()?;

    let letters = LetterSequence::from_text(ciphertext);
    select_from_estimate(ciphertext, &letters, friedman_estimate(ciphertext), config)
}

/// Selection for an already validated config, with the letters of `ciphertext`
/// and its Friedman estimate computed by the caller.
pub(crate) fn select_from_estimate(
    ciphertext: &str,
    letters: &LetterSequence,
    estimate: f64,
    config: &AnalysisConfig,
) -> Result<Candidate> {
    let window = candidate_window(estimate, config);
    debug!(estimate, ?window, "searching key lengths");

    let evaluate = |key_len: usize| -> Result<Candidate> {
        let key = recover_from_letters(letters, key_len, config.language, config.metric)?;
        let plaintext = Ciphers::vigenere_decrypt(ciphertext, &key);
        let score = plaintext_score(&plaintext);
        debug!(key_len, %key, score, "candidate");
        Ok(Candidate {
            key,
            plaintext,
            score,
        })
    };

    // collected in window order, so ties resolve the same way in parallel
    #[cfg(feature = "parallel")]
    let candidates: Vec<Candidate> = window.into_par_iter().map(evaluate).collect::<Result<_>>()?;
    #[cfg(not(feature = "parallel"))]
    let candidates: Vec<Candidate> = window.map(evaluate).collect::<Result<_>>()?;

    let mut best: Option<Candidate> = None;
    for candidate in candidates {
        if best.as_ref().map_or(true, |b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }

    best.ok_or_else(|| CipherError::InvalidInput("No key length to try".to_string()))
}
