//! Vigenère cryptanalysis
//!
//! The pipeline: the Friedman estimate (from the index of coincidence) gives an
//! approximate key length; [`selector`] tries a few lengths around it, recovering
//! a key for each with per-column frequency analysis ([`recovery`]) and keeping
//! the key whose decryption looks most like language. Kasiski factor votes and the
//! column-IC ranking are reported alongside as independent hints.

pub mod kasiski;
pub mod language;
pub mod recovery;
pub mod selector;
pub mod statistics;

pub use kasiski::{kasiski_examination, kasiski_with_sequence_len, FactorVote};
pub use language::{FrequencyProfile, Language};
pub use recovery::{recover_key, recover_key_with, ShiftMetric};
pub use selector::{plaintext_score, select_key, select_key_with, Candidate};
pub use statistics::{friedman_estimate, index_of_coincidence, rank_key_lengths_by_ic};

use tracing::debug;

use crate::alphabet::LetterSequence;
use crate::error::{CipherError, Result};

/// Settings for key length search and key recovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Exclusive upper bound on the key lengths tried
    pub max_key_len: usize,
    /// Lengths tried below the Friedman estimate
    pub window_below: usize,
    /// The window ends this far above the estimate (exclusive)
    pub window_above: usize,
    /// Length of the repeated sequences used by the Kasiski examination
    pub sequence_len: usize,
    pub language: Language,
    pub metric: ShiftMetric,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_key_len: 100,
            window_below: 2,
            window_above: 3,
            sequence_len: kasiski::DEFAULT_SEQUENCE_LEN,
            language: Language::default(),
            metric: ShiftMetric::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_key_len < 2 {
            return Err(CipherError::InvalidInput(format!(
                "Maximum key length must be at least 2, got {}",
                self.max_key_len
            )));
        }

        if self.sequence_len < 2 {
            return Err(CipherError::InvalidInput(format!(
                "Kasiski sequence length must be at least 2, got {}",
                self.sequence_len
            )));
        }

        Ok(())
    }
}

/// Everything learned about a ciphertext
#[derive(Debug, Clone, PartialEq)]
pub struct CryptanalysisReport {
    pub index_of_coincidence: f64,
    pub friedman_estimate: f64,
    pub kasiski: Vec<FactorVote>,
    /// Key lengths below `max_key_len` ranked by average column IC
    pub ic_ranking: Vec<(usize, f64)>,
    pub best: Candidate,
}

/// Runs every estimator on `ciphertext` and selects the best key.
pub fn analyze(ciphertext: &str, config: &AnalysisConfig) -> Result<CryptanalysisReport> {
    config.validate()?;

    let letters = LetterSequence::from_text(ciphertext);
    let index_of_coincidence = statistics::sequence_ic(&letters);
    let friedman_estimate = statistics::friedman_from_ic(index_of_coincidence);
    let kasiski = kasiski_with_sequence_len(ciphertext, config.sequence_len);
    let ic_ranking = statistics::rank_letters_by_ic(&letters, config.max_key_len - 1);
    debug!(
        index_of_coincidence,
        friedman_estimate,
        repeated_factors = kasiski.len(),
        "statistics done"
    );

    let best = selector::select_from_estimate(ciphertext, &letters, friedman_estimate, config)?;

    Ok(CryptanalysisReport {
        index_of_coincidence,
        friedman_estimate,
        kasiski,
        ic_ranking,
        best,
    })
}
