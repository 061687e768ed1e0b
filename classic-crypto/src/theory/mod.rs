//! # Number Theory Module
//!
//! The integer arithmetic backing the RSA engine: gcd, primality testing,
//! modular exponentiation and modular inverses.
//!
//! All functions work on `i64`, widening through `i128` wherever a product
//! could overflow. This is exact for any modulus `n < 2^62`, far beyond the
//! two-digit primes the teaching UI works with.

pub mod helper;
pub mod math;

pub use helper::{extended_gcd, gcd};
pub use math::{is_prime, mod_inverse, mod_pow};
