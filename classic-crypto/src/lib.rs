//! # classic-crypto
//!
//! The computation engine behind an interactive cipher teaching tool:
//! Caesar and Vigenère substitution over A-Z, textbook RSA from two small
//! primes, the number theory underneath, and per-unit worked calculations
//! for display.
//!
//! Every operation is a pure synchronous function over caller-supplied
//! parameters; the presentation layer owns all state. Key sizes are
//! pedagogical — nothing here provides real secrecy.

pub mod caesar;
pub mod errors;
pub mod explain;
pub mod preset;
pub mod rsa;
pub mod theory;
pub mod vigenere;

pub use errors::ClassicCryptoError;
pub use explain::CalculationStep;
pub use rsa::{RsaKeyPair, RsaPrivateKey, RsaPublicKey};
