//! # Caesar Cipher Module
//!
//! Fixed-shift substitution over the A-Z alphabet. Letters are upper-cased
//! before shifting; anything outside the alphabet passes through untouched.

use crate::preset::{letter_at, letter_index};

/// Reduces an arbitrary integer shift into a forward shift in `[0, 26)`,
/// negating it first when decrypting.
///
/// # Example
///
/// ```
/// # use classic_crypto::caesar::effective_shift;
/// assert_eq!(effective_shift(3, false), 3);
/// assert_eq!(effective_shift(3, true), 23);
/// assert_eq!(effective_shift(-1, false), 25);
/// assert_eq!(effective_shift(29, false), 3);
/// assert_eq!(effective_shift(26, true), 0);
/// ```
pub fn effective_shift(shift: i64, decrypting: bool) -> i64 {
    let s = shift.rem_euclid(26);
    if decrypting { (26 - s) % 26 } else { s }
}

/// Shifts a single zero-based letter index forward by `shift`, wrapping
/// around the alphabet. The double modulo keeps negative intermediates safe.
pub(crate) fn shift_index(index: i64, shift: i64) -> i64 {
    ((index + shift) % 26 + 26) % 26
}

/// Applies the Caesar cipher to `text`.
///
/// Letters are upper-cased and shifted by `shift` positions (backwards when
/// `decrypting`); non-letter characters are copied through verbatim and do
/// not consume a shift position. Correct for any integer shift, including
/// negatives and values above 25.
///
/// # Example
///
/// ```
/// # use classic_crypto::caesar;
/// assert_eq!(caesar::transform("HELLO", 3, false), "KHOOR");
/// assert_eq!(caesar::transform("KHOOR", 3, true), "HELLO");
/// assert_eq!(caesar::transform("attack at dawn!", 5, false), "FYYFHP FY IFBS!");
/// ```
pub fn transform(text: &str, shift: i64, decrypting: bool) -> String {
    let s = effective_shift(shift, decrypting);

    text.chars()
        .map(|raw| {
            let ch = raw.to_ascii_uppercase();
            match letter_index(ch) {
                Some(index) => letter_at(shift_index(index, s)).unwrap_or(ch),
                None => raw,
            }
        })
        .collect()
}
