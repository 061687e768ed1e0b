//! # RSA Engine Module
//!
//! Key generation from two primes plus encrypt/decrypt over space-separated
//! decimal tokens. Plaintext comes in two modes, detected automatically:
//!
//! * **numeric** — the whole input is whitespace-separated decimal integers;
//!   each one is exponentiated directly;
//! * **text** — letters map to 1..=26 (A=1 ... Z=26) before exponentiation,
//!   and every other character becomes the sentinel token `0`.
//!
//! The detection rule is deliberately blunt for compatibility with the
//! original teaching tool: a message consisting solely of digits and spaces
//! is always taken as numbers, never as text.

pub mod keys;

pub use keys::{RsaKeyPair, RsaPrivateKey, RsaPublicKey};

use crate::preset::letter_index;
use crate::theory::mod_pow;

use itertools::Itertools;

/// Sentinel plaintext/ciphertext value for spaces and other non-letters.
const NON_LETTER_SENTINEL: &str = "0";

/// True when the trimmed input consists of one or more whitespace-separated
/// decimal integers and nothing else (the original's `^(\d+\s*)+$`).
fn is_numeric_input(trimmed: &str) -> bool {
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || ch.is_whitespace())
}

/// Encrypts `input` with the public key `(e, n)`, producing space-separated
/// decimal ciphertext tokens.
///
/// In text mode each non-letter character is emitted as a literal `"0"`
/// without exponentiation (0^e mod n is 0 regardless). Digits inside mixed
/// text also collapse to `0`; that mirrors the original letter table, which
/// only assigns codes to A-Z.
///
/// # Example
///
/// ```
/// # use classic_crypto::rsa;
/// assert_eq!(rsa::encrypt("G", 3, 187), "156"); // 7^3 mod 187
/// assert_eq!(rsa::encrypt("GO", 3, 187), "156 9");
/// assert_eq!(rsa::encrypt("12 34", 3, 187), "45 34"); // numeric mode
/// ```
pub fn encrypt(input: &str, e: i64, n: i64) -> String {
    let trimmed = input.trim();

    if is_numeric_input(trimmed) {
        return trimmed
            .split_whitespace()
            .filter_map(|token| token.parse::<i64>().ok())
            .map(|m| mod_pow(m, e, n).to_string())
            .join(" ");
    }

    input
        .chars()
        .map(|raw| match letter_index(raw.to_ascii_uppercase()) {
            Some(index) => mod_pow(index + 1, e, n).to_string(),
            None => NON_LETTER_SENTINEL.to_string(),
        })
        .join(" ")
}

/// Decrypts space-separated ciphertext tokens with the private key `(d, n)`.
///
/// A `0` token decodes to a space; unparseable tokens are dropped silently.
/// Every other token `c` becomes `c^d mod n`, mapped back through
/// `m + 64` (1=A ... 26=Z). An `m` outside 1..=26 — inconsistent keys or
/// corrupted ciphertext — still goes through the arithmetic mapping and
/// yields whatever character lands there; the engine does not guard it.
///
/// # Example
///
/// ```
/// # use classic_crypto::rsa;
/// assert_eq!(rsa::decrypt("156", 107, 187), "G");
/// assert_eq!(rsa::decrypt("156 0 9", 107, 187), "G O");
/// assert_eq!(rsa::decrypt("156 junk 9", 107, 187), "GO");
/// ```
pub fn decrypt(input: &str, d: i64, n: i64) -> String {
    input
        .split_whitespace()
        .filter_map(|token| token.parse::<i64>().ok())
        .map(|c| {
            if c == 0 {
                return " ".to_string();
            }

            let m = mod_pow(c, d, n);
            u32::try_from(m + 64)
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_default()
        })
        .collect()
}
