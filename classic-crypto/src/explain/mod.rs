//! # Explanation Module
//!
//! Worked per-unit arithmetic for the teaching UI: the same computations the
//! ciphers perform, re-run one character (or one ciphertext token) at a time
//! and rendered as display strings. No algorithm of its own — everything
//! routes through [`crate::preset`] and [`crate::theory`].

use crate::preset::{letter_at, letter_index};
use crate::theory::mod_pow;
use crate::vigenere::clean_keyword;

use serde::Serialize;

/// One row of a worked calculation: the transformed unit, the key material
/// that drove it, and the arithmetic spelled out.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct CalculationStep {
    pub result: String,
    pub key_char: String,
    pub calculation: String,
}

impl CalculationStep {
    /// The placeholder row for characters the cipher passes through.
    fn passthrough(ch: char) -> Self {
        Self {
            result: ch.to_string(),
            key_char: "-".to_string(),
            calculation: "-".to_string(),
        }
    }
}

/// Renders the Caesar arithmetic for a single letter.
///
/// Non-letter characters produce a passthrough row. Decryption shows the
/// raw (possibly negative) difference before normalization, the way the
/// lesson walks through it.
///
/// # Example
///
/// ```
/// # use classic_crypto::explain::caesar_step;
/// let step = caesar_step('H', 3, false);
/// assert_eq!(step.result, "K");
/// assert_eq!(step.calculation, "(7 + 3) mod 26 = 10");
///
/// let step = caesar_step('A', 3, true);
/// assert_eq!(step.result, "X");
/// assert_eq!(step.calculation, "(0 - 3) mod 26 = (-3) mod 26 = 23");
/// ```
pub fn caesar_step(ch: char, shift: i64, decrypting: bool) -> CalculationStep {
    let ch = ch.to_ascii_uppercase();
    let Some(pos) = letter_index(ch) else {
        return CalculationStep::passthrough(ch);
    };

    shift_row(pos, shift, shift.to_string(), decrypting)
}

/// Renders the Vigenère arithmetic for the letter at `position` within the
/// letters-only view of the message.
///
/// The key column shows the keyword letter with its index, e.g. `"K (10)"`.
///
/// # Example
///
/// ```
/// # use classic_crypto::explain::vigenere_step;
/// let step = vigenere_step('H', 0, "KEY", false);
/// assert_eq!(step.result, "R");
/// assert_eq!(step.key_char, "K (10)");
/// assert_eq!(step.calculation, "(7 + 10) mod 26 = 17");
/// ```
pub fn vigenere_step(ch: char, position: usize, keyword: &str, decrypting: bool) -> CalculationStep {
    let ch = ch.to_ascii_uppercase();
    let Some(pos) = letter_index(ch) else {
        return CalculationStep::passthrough(ch);
    };

    let key = clean_keyword(keyword);
    let key_chars: Vec<char> = key.chars().collect();
    let key_char = key_chars[position % key_chars.len()];
    let key_shift = letter_index(key_char).unwrap_or(0);

    shift_row(pos, key_shift, format!("{} ({})", key_char, key_shift), decrypting)
}

/// Renders the RSA encryption arithmetic for a single letter:
/// `"G=7 → 7^3 mod 187 = 156"`.
///
/// # Example
///
/// ```
/// # use classic_crypto::explain::rsa_encrypt_step;
/// let step = rsa_encrypt_step('G', 3, 187);
/// assert_eq!(step.result, "156");
/// assert_eq!(step.key_char, "(e=3, n=187)");
/// assert_eq!(step.calculation, "G=7 → 7^3 mod 187 = 156");
/// ```
pub fn rsa_encrypt_step(ch: char, e: i64, n: i64) -> CalculationStep {
    let ch = ch.to_ascii_uppercase();
    let Some(pos) = letter_index(ch) else {
        return CalculationStep::passthrough(ch);
    };

    let m = pos + 1;
    let c = mod_pow(m, e, n);

    CalculationStep {
        result: c.to_string(),
        key_char: format!("(e={}, n={})", e, n),
        calculation: format!("{}={} → {}^{} mod {} = {}", ch, m, m, e, n, c),
    }
}

/// Renders the RSA decryption arithmetic for one ciphertext token:
/// `"156^107 mod 187 = 7 → 7=G"`.
///
/// A decrypted value outside 1..=26 has no letter; the row then shows the
/// number itself as the result, matching the unguarded decrypt mapping.
///
/// # Example
///
/// ```
/// # use classic_crypto::explain::rsa_decrypt_step;
/// let step = rsa_decrypt_step("156", 107, 187);
/// assert_eq!(step.result, "G");
/// assert_eq!(step.calculation, "156^107 mod 187 = 7 → 7=G");
/// ```
pub fn rsa_decrypt_step(token: &str, d: i64, n: i64) -> CalculationStep {
    let Ok(c) = token.parse::<i64>() else {
        return CalculationStep {
            result: String::new(),
            key_char: "-".to_string(),
            calculation: "-".to_string(),
        };
    };

    let m = mod_pow(c, d, n);
    let letter = letter_at(m - 1).map(String::from).unwrap_or_else(|| m.to_string());

    CalculationStep {
        result: letter.clone(),
        key_char: format!("(d={}, n={})", d, n),
        calculation: format!("{}^{} mod {} = {} → {}={}", c, d, n, m, m, letter),
    }
}

/// Shared Caesar/Vigenère row: forward shifts show one modulo, backward
/// shifts also show the raw negative intermediate.
fn shift_row(pos: i64, shift: i64, key_char: String, decrypting: bool) -> CalculationStep {
    if decrypting {
        let raw = pos - shift;
        let new_pos = (raw % 26 + 26) % 26;
        CalculationStep {
            result: letter_at(new_pos).map(String::from).unwrap_or_default(),
            key_char,
            calculation: format!("({} - {}) mod 26 = ({}) mod 26 = {}", pos, shift, raw, new_pos),
        }
    } else {
        let new_pos = (pos + shift).rem_euclid(26);
        CalculationStep {
            result: letter_at(new_pos).map(String::from).unwrap_or_default(),
            key_char,
            calculation: format!("({} + {}) mod 26 = {}", pos, shift, new_pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{caesar, rsa, vigenere};

    #[test]
    fn test_caesar_step_matches_transform() {
        let step = caesar_step('H', 3, false);
        assert_eq!(step.result, caesar::transform("H", 3, false));
        assert_eq!(step.key_char, "3");
        assert_eq!(step.calculation, "(7 + 3) mod 26 = 10");
    }

    #[test]
    fn test_caesar_step_decrypt_shows_raw_difference() {
        let step = caesar_step('A', 5, true);
        assert_eq!(step.result, "V");
        assert_eq!(step.calculation, "(0 - 5) mod 26 = (-5) mod 26 = 21");
    }

    #[test]
    fn test_caesar_step_passthrough() {
        let step = caesar_step('!', 3, false);
        assert_eq!(step.result, "!");
        assert_eq!(step.key_char, "-");
        assert_eq!(step.calculation, "-");
    }

    #[test]
    fn test_vigenere_steps_follow_keyword_cycle() {
        // HELLO / KEY: positions 0..5 use K E Y K E
        let expected = ["R", "I", "J", "V", "S"];
        for (i, (ch, want)) in "HELLO".chars().zip(expected).enumerate() {
            let step = vigenere_step(ch, i, "KEY", false);
            assert_eq!(step.result, want);
        }

        let step = vigenere_step('L', 3, "KEY", false);
        assert_eq!(step.key_char, "K (10)");
    }

    #[test]
    fn test_vigenere_step_matches_transform() {
        let full = vigenere::transform("HELLO", "KEY", false);
        let first = vigenere_step('H', 0, "KEY", false);
        assert_eq!(first.result, full.chars().next().unwrap().to_string());
    }

    #[test]
    fn test_rsa_encrypt_step_matches_engine() {
        let step = rsa_encrypt_step('G', 3, 187);
        assert_eq!(step.result, rsa::encrypt("G", 3, 187));
        assert_eq!(step.calculation, "G=7 → 7^3 mod 187 = 156");
    }

    #[test]
    fn test_rsa_decrypt_step_recovers_letter() {
        let step = rsa_decrypt_step("156", 107, 187);
        assert_eq!(step.result, "G");
        assert_eq!(step.key_char, "(d=107, n=187)");
        assert_eq!(step.calculation, "156^107 mod 187 = 7 → 7=G");
    }

    #[test]
    fn test_rsa_decrypt_step_out_of_range_shows_number() {
        // 30^3 mod 187 = 72; decrypting 72 yields 30, past 'Z'
        let step = rsa_decrypt_step("72", 107, 187);
        assert_eq!(step.result, "30");
        assert_eq!(step.calculation, "72^107 mod 187 = 30 → 30=30");
    }

    #[test]
    fn test_rsa_decrypt_step_unparseable_token() {
        let step = rsa_decrypt_step("junk", 107, 187);
        assert_eq!(step.result, "");
        assert_eq!(step.calculation, "-");
    }
}
