use crate::errors::ClassicCryptoError;
use crate::theory::{gcd, is_prime, mod_inverse};

use serde::{Deserialize, Serialize};

/// The public half of an RSA key pair: exponent `e` and modulus `n`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RsaPublicKey {
    pub e: i64,
    pub n: i64,
}

/// The private half of an RSA key pair: exponent `d` and modulus `n`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RsaPrivateKey {
    pub d: i64,
    pub n: i64,
}

/// A full RSA key pair derived from two distinct primes, with the totient
/// kept around because the teaching UI displays it.
///
/// Invariants: `1 < e`, `gcd(e, phi) == 1`, `e * d ≡ 1 (mod phi)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
    pub phi: i64,
}

impl RsaKeyPair {
    /// Generates a key pair from two distinct primes.
    ///
    /// Computes `n = p * q` and `phi = (p - 1) * (q - 1)`, picks the smallest
    /// odd `e >= 3` coprime to `phi` (3, 5, 7, ...), and derives
    /// `d = e^-1 mod phi`. The search is deterministic: the same `(p, q)`
    /// always produce the same pair.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::InvalidKey` if either input is not prime
    /// or if `p == q`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::rsa::RsaKeyPair;
    /// let keys = RsaKeyPair::try_with(11, 17).unwrap();
    /// assert_eq!(keys.public_key.e, 3);
    /// assert_eq!(keys.public_key.n, 187);
    /// assert_eq!(keys.private_key.d, 107);
    /// assert_eq!(keys.phi, 160);
    /// ```
    pub fn try_with(p: i64, q: i64) -> Result<Self, ClassicCryptoError> {
        if !is_prime(p) || !is_prime(q) {
            return Err(ClassicCryptoError::InvalidKey(format!(
                "p and q must both be prime, got p={}, q={}",
                p, q
            )));
        }

        if p == q {
            return Err(ClassicCryptoError::InvalidKey(format!(
                "p and q must be distinct, got p=q={}",
                p
            )));
        }

        let n = p * q;
        let phi = (p - 1) * (q - 1);

        // Smallest odd public exponent coprime to phi; phi is even for any
        // pair of odd primes, so the search stays on odd candidates.
        let mut e: i64 = 3;
        while gcd(e, phi) != 1 {
            e += 2;
        }

        let d = mod_inverse(e, phi)?;

        Ok(Self {
            public_key: RsaPublicKey { e, n },
            private_key: RsaPrivateKey { d, n },
            phi,
        })
    }

    /// Serializes the key pair to JSON, the format the consuming layer
    /// persists and displays.
    pub fn to_json(&self) -> Result<String, ClassicCryptoError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restores a key pair from its JSON form.
    pub fn from_json(data: &str) -> Result<Self, ClassicCryptoError> {
        Ok(serde_json::from_str(data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_pair() {
        let keys = RsaKeyPair::try_with(11, 17).unwrap();
        assert_eq!(keys.public_key, RsaPublicKey { e: 3, n: 187 });
        assert_eq!(keys.private_key, RsaPrivateKey { d: 107, n: 187 });
        assert_eq!(keys.phi, 160);
    }

    #[test]
    fn test_e_skips_non_coprime_candidates() {
        // phi = 4 * 6 = 24; 3 divides it, so the search lands on 5
        let keys = RsaKeyPair::try_with(5, 7).unwrap();
        assert_eq!(keys.public_key.e, 5);
        assert_eq!(gcd(keys.public_key.e, keys.phi), 1);
    }

    #[test]
    fn test_exponents_are_inverse_mod_phi() {
        for (p, q) in [(11, 17), (13, 19), (23, 29), (61, 53)] {
            let keys = RsaKeyPair::try_with(p, q).unwrap();
            let product = keys.public_key.e as i128 * keys.private_key.d as i128;
            assert_eq!(product.rem_euclid(keys.phi as i128), 1);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = RsaKeyPair::try_with(13, 19).unwrap();
        let b = RsaKeyPair::try_with(13, 19).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_non_primes() {
        assert!(RsaKeyPair::try_with(4, 11).is_err());
        assert!(RsaKeyPair::try_with(11, 1).is_err());
        assert!(RsaKeyPair::try_with(0, 17).is_err());
    }

    #[test]
    fn test_rejects_equal_primes() {
        assert!(RsaKeyPair::try_with(7, 7).is_err());
    }

    #[test]
    fn test_json_roundtrip() -> Result<(), ClassicCryptoError> {
        let keys = RsaKeyPair::try_with(11, 17)?;
        let restored = RsaKeyPair::from_json(&keys.to_json()?)?;
        assert_eq!(keys, restored);
        Ok(())
    }
}
