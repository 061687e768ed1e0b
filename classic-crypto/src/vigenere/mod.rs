//! # Vigenère Cipher Module
//!
//! Repeating-keyword substitution: the i-th alphabetic letter of the message
//! is Caesar-shifted by the index of the (i mod keyword length)-th keyword
//! letter. Non-letter characters pass through without advancing the keyword,
//! so punctuation never desynchronizes the key stream.

use crate::caesar::shift_index;
use crate::preset::{letter_at, letter_index};

/// Fallback keyword used when cleaning leaves nothing behind.
pub const DEFAULT_KEYWORD: &str = "KEY";

/// Upper-cases a raw keyword and strips everything outside A-Z.
///
/// An empty result (empty input, or input with no letters at all) falls back
/// to [`DEFAULT_KEYWORD`] so the cipher always has a key stream.
///
/// # Example
///
/// ```
/// # use classic_crypto::vigenere::clean_keyword;
/// assert_eq!(clean_keyword("key"), "KEY");
/// assert_eq!(clean_keyword("k3y!"), "KY");
/// assert_eq!(clean_keyword("123"), "KEY");
/// assert_eq!(clean_keyword(""), "KEY");
/// ```
pub fn clean_keyword(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|ch| ch.to_ascii_uppercase())
        .filter(|ch| ch.is_ascii_uppercase())
        .collect();

    if cleaned.is_empty() {
        return DEFAULT_KEYWORD.to_string();
    }

    cleaned
}

/// Applies the Vigenère cipher to `text` with the given keyword.
///
/// The keyword is cleaned with [`clean_keyword`] first. Each alphabetic
/// message letter is shifted by the current keyword letter's index (negated
/// when `decrypting`), and only alphabetic letters advance the keyword
/// position.
///
/// # Example
///
/// ```
/// # use classic_crypto::vigenere;
/// assert_eq!(vigenere::transform("HELLO", "KEY", false), "RIJVS");
/// assert_eq!(vigenere::transform("RIJVS", "KEY", true), "HELLO");
/// ```
pub fn transform(text: &str, keyword: &str, decrypting: bool) -> String {
    let key = clean_keyword(keyword);
    let key_indices: Vec<i64> = key.chars().filter_map(letter_index).collect();

    let mut key_position = 0usize;

    text.chars()
        .map(|raw| {
            let ch = raw.to_ascii_uppercase();
            match letter_index(ch) {
                Some(index) => {
                    let shift = key_indices[key_position % key_indices.len()];
                    key_position += 1;

                    let s = if decrypting { (26 - shift % 26) % 26 } else { shift };
                    letter_at(shift_index(index, s)).unwrap_or(ch)
                }
                None => raw,
            }
        })
        .collect()
}
