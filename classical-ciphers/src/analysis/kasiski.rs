//! Kasiski examination
//!
//! Repeated ciphertext n-grams are often the same plaintext fragment enciphered at
//! the same key position, so the distance between repeats tends to be a multiple
//! of the key length. Every factor of every distance gets a vote; the result is a
//! distribution of hints, not an answer. Small factors such as 2 and 3 collect
//! votes from every multiple and usually sit near the top.

use std::collections::{BTreeMap, HashMap};

use crate::alphabet::LetterSequence;

/// Length of the repeated sequences looked for by [`kasiski_examination`].
pub const DEFAULT_SEQUENCE_LEN: usize = 3;

/// Number of repeat distances divisible by a candidate key length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorVote {
    pub factor: usize,
    pub votes: usize,
}

/// Distances between consecutive occurrences of every repeated n-gram.
///
/// Only neighbouring occurrences are paired: an n-gram seen at positions 0, 10
/// and 30 contributes 10 and 20, not 30. Distances are grouped by n-gram in order
/// of first occurrence.
pub fn repeat_distances(letters: &LetterSequence, sequence_len: usize) -> Vec<usize> {
    let mut first_seen: Vec<&[u8]> = Vec::new();
    let mut positions: HashMap<&[u8], Vec<usize>> = HashMap::new();

    for (position, sequence) in letters.windows(sequence_len).enumerate() {
        positions
            .entry(sequence)
            .or_insert_with(|| {
                first_seen.push(sequence);
                Vec::new()
            })
            .push(position);
    }

    first_seen
        .iter()
        .flat_map(|sequence| {
            positions[sequence]
                .windows(2)
                .map(|pair| pair[1] - pair[0])
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Kasiski examination with trigrams.
pub fn kasiski_examination(text: &str) -> Vec<FactorVote> {
    kasiski_with_sequence_len(text, DEFAULT_SEQUENCE_LEN)
}

/// Kasiski examination with n-grams of `sequence_len` letters.
///
/// Returns every factor `f >= 2` of any repeat distance together with the number
/// of distances it divides, most votes first; equal votes list the smaller factor
/// first. Empty when nothing repeats.
pub fn kasiski_with_sequence_len(text: &str, sequence_len: usize) -> Vec<FactorVote> {
    let letters = LetterSequence::from_text(text);
    let distances = repeat_distances(&letters, sequence_len);

    let mut tally: BTreeMap<usize, usize> = BTreeMap::new();
    for &distance in &distances {
        for factor in (2..=distance).filter(|f| distance % f == 0) {
            *tally.entry(factor).or_insert(0) += 1;
        }
    }

    let mut votes: Vec<FactorVote> = tally
        .into_iter()
        .map(|(factor, votes)| FactorVote { factor, votes })
        .collect();

    // stable: BTreeMap order keeps smaller factors first on equal votes
    votes.sort_by(|a, b| b.votes.cmp(&a.votes));
    votes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ciphers::Ciphers;
    use crate::key::VigenereKey;
    use crate::sample::WILDE_PREFACE;

    fn top_factors(text: &str, count: usize) -> Vec<usize> {
        kasiski_examination(text)
            .iter()
            .take(count)
            .map(|vote| vote.factor)
            .collect()
    }

    #[test]
    fn test_consecutive_distances_only() {
        // ABC at 0, 6 and 15
        let letters = LetterSequence::from_text("ABCxyzABCxyzqrsABC");
        let distances = repeat_distances(&letters, 3);
        assert_eq!(distances.iter().filter(|&&d| d == 15).count(), 0);
        assert!(distances.contains(&6));
        assert!(distances.contains(&9));
    }

    #[test]
    fn test_factor_votes() {
        // "ABC" at 0 and 12, nothing else repeats
        let votes = kasiski_examination("ABCDEFGHIJKLABC");
        let expected: Vec<(usize, usize)> = vec![(2, 1), (3, 1), (4, 1), (6, 1), (12, 1)];
        let actual: Vec<(usize, usize)> = votes.iter().map(|v| (v.factor, v.votes)).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_ranking_by_votes_then_factor() {
        // distances 4 and 6: 2 has two votes, then 3, 4, 6 with one each
        let votes = kasiski_examination("ABCDABCXYZQRSXYZ");
        assert_eq!(votes[0], FactorVote { factor: 2, votes: 2 });
        let rest: Vec<usize> = votes[1..].iter().map(|v| v.factor).collect();
        assert_eq!(rest, vec![3, 4, 6]);
    }

    #[test]
    fn test_ignores_case_and_punctuation() {
        assert_eq!(
            kasiski_examination("abc d-e-f ABC"),
            kasiski_examination("ABCDEFABC")
        );
    }

    #[test]
    fn test_short_or_unique_text() {
        assert!(kasiski_examination("").is_empty());
        assert!(kasiski_examination("AB").is_empty());
        assert!(kasiski_examination("ABCDEFGHIJ").is_empty());
        assert!(kasiski_with_sequence_len("AAAA", 0).is_empty());
    }

    #[test]
    fn test_key_length_among_top_factors() {
        let text = WILDE_PREFACE.repeat(2);
        let encrypted = Ciphers::vigenere_encrypt(&text, &VigenereKey::new("LEMON").unwrap());
        assert_eq!(top_factors(&encrypted, 1), vec![5]);

        let encrypted =
            Ciphers::vigenere_encrypt(WILDE_PREFACE, &VigenereKey::new("CRYPTOGRAPHY").unwrap());
        let top = top_factors(&encrypted, 6);
        assert!(top.contains(&12), "{top:?}");
    }
}
