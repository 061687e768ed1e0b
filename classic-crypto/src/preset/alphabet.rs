use lazy_static::lazy_static;
use std::collections::HashMap;

/// The fixed cipher alphabet. Every index used by the engine is a
/// zero-based position into this string (A=0 ... Z=25).
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

lazy_static! {
    /// A static HashMap mapping an upper-case letter (A-Z) to its
    /// zero-based alphabet index (0 to 25).
    pub static ref LETTER_TO_INDEX_MAP: HashMap<char, i64> = {
        let mut map = HashMap::new();

        for (i, ch) in ALPHABET.chars().enumerate() {
            map.insert(ch, i as i64);
        }

        map
    };

    /// A static HashMap mapping a zero-based index (0 to 25) to its
    /// corresponding upper-case letter (A-Z).
    pub static ref INDEX_TO_LETTER_MAP: HashMap<i64, char> = {
        let mut map = HashMap::new();

        for (&ch, &index) in LETTER_TO_INDEX_MAP.iter() {
            map.insert(index, ch);
        }

        map
    };
}

/// Returns the zero-based alphabet index of an upper-case letter,
/// or `None` for anything outside A-Z.
///
/// # Example
///
/// ```
/// # use classic_crypto::preset::letter_index;
/// assert_eq!(letter_index('A'), Some(0));
/// assert_eq!(letter_index('Z'), Some(25));
/// assert_eq!(letter_index('!'), None);
/// assert_eq!(letter_index('a'), None); // callers upper-case first
/// ```
pub fn letter_index(ch: char) -> Option<i64> {
    LETTER_TO_INDEX_MAP.get(&ch).copied()
}

/// Returns the upper-case letter at a zero-based alphabet index,
/// or `None` if the index is outside [0, 25].
///
/// # Example
///
/// ```
/// # use classic_crypto::preset::letter_at;
/// assert_eq!(letter_at(0), Some('A'));
/// assert_eq!(letter_at(25), Some('Z'));
/// assert_eq!(letter_at(26), None);
/// assert_eq!(letter_at(-1), None);
/// ```
pub fn letter_at(index: i64) -> Option<char> {
    INDEX_TO_LETTER_MAP.get(&index).copied()
}
