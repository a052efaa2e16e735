//! Cipher implementations

pub mod combined;
pub mod table;
pub mod transposition;
pub mod vigenere;

pub use combined::CombinedCipher;
pub use table::TableCipher;
pub use transposition::{DoubleTransposition, Transposition};
pub use vigenere::Vigenere;

/// Main struct for the cipher functions
pub struct Ciphers;
