//! Primality testing, modular exponentiation and modular inverses.

use crate::errors::ClassicCryptoError;

use super::extended_gcd;

/// Tests whether `n` is prime by trial division up to ⌊√n⌋.
///
/// Returns `false` for every `n <= 1`, including negatives.
///
/// # Example
///
/// ```
/// # use classic_crypto::theory::is_prime;
/// assert!(is_prime(2));
/// assert!(is_prime(3));
/// assert!(is_prime(17));
/// assert!(!is_prime(1));
/// assert!(!is_prime(0));
/// assert!(!is_prime(-5));
/// assert!(!is_prime(187)); // 11 * 17
/// ```
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }

    let mut i: i64 = 2;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }

    true
}

/// Computes `base^exp mod modulus` by iterative square-and-multiply.
///
/// `base` is reduced modulo `modulus` first; each round squares the running
/// base and halves `exp`, multiplying into the result whenever the current
/// bit of `exp` is set. Negative `exp` is treated as 0.
///
/// Uses `i128` internally to prevent overflow during multiplication before
/// the modulo operation.
///
/// # Example
///
/// ```
/// # use classic_crypto::theory::mod_pow;
/// assert_eq!(mod_pow(7, 3, 187), 156); // 343 mod 187
/// assert_eq!(mod_pow(156, 107, 187), 7);
/// assert_eq!(mod_pow(5, 0, 11), 1);
/// assert_eq!(mod_pow(0, 9, 11), 0);
/// ```
pub fn mod_pow(base: i64, exp: i64, modulus: i64) -> i64 {
    let m = modulus as i128;

    let mut result: i128 = 1;
    let mut base = (base as i128).rem_euclid(m);
    let mut exp = exp;

    while exp > 0 {
        if exp % 2 == 1 {
            result = (result * base) % m;
        }
        exp /= 2;
        base = (base * base) % m;
    }

    result as i64
}

/// Computes the modular multiplicative inverse `x` with `e * x ≡ 1 (mod phi)`.
///
/// The inverse exists if and only if `gcd(e, phi) == 1`. Uses the Extended
/// Euclidean Algorithm and normalizes the result into `[0, phi)`.
///
/// The degenerate modulus `phi == 1` returns 0: no true inverse exists there,
/// but callers working in the trivial ring must not be handed an error.
///
/// # Errors
///
/// Returns `ClassicCryptoError::NoInverse` if `gcd(e, phi) != 1`.
///
/// # Example
///
/// ```
/// # use classic_crypto::theory::mod_inverse;
/// assert_eq!(mod_inverse(3, 160).unwrap(), 107); // 3 * 107 = 321 = 1 mod 160
/// assert_eq!(mod_inverse(7, 40).unwrap(), 23);
/// assert_eq!(mod_inverse(5, 1).unwrap(), 0);
/// assert!(mod_inverse(4, 8).is_err()); // gcd(4, 8) = 4
/// ```
pub fn mod_inverse(e: i64, phi: i64) -> Result<i64, ClassicCryptoError> {
    if phi == 1 {
        return Ok(0);
    }

    let (g, x, _) = extended_gcd(e, phi);
    if g != 1 {
        return Err(ClassicCryptoError::NoInverse(format!(
            "Modular inverse does not exist for {} mod {} (gcd={})",
            e, phi, g
        )));
    }

    Ok((x % phi + phi) % phi)
}
