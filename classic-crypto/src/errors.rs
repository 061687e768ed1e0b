#[derive(thiserror::Error, Debug)]
pub enum ClassicCryptoError {
    /// Error when trying to find a modular inverse that doesn't exist (gcd(e, phi) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// Error when generating an RSA key pair from invalid primes (non-prime or equal p, q).
    #[error("InvalidKey: {0}")]
    InvalidKey(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
