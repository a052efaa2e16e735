//! Utility functions for the grid ciphers

/// Character used to fill an incomplete last grid row.
pub const PADDING: char = ' ';

/// Right-pad `chars` with spaces up to the next multiple of `width`
pub fn add_padding(chars: &[char], width: usize) -> Vec<char> {
    let mut padded = chars.to_vec();
    if width == 0 {
        return padded;
    }

    let remainder = chars.len() % width;
    if remainder != 0 {
        padded.extend(std::iter::repeat(PADDING).take(width - remainder));
    }

    padded
}

/// Remove trailing whitespace left by padding. Interior spaces are kept.
pub fn remove_padding(text: &str) -> &str {
    text.trim_end()
}
