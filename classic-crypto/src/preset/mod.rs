//! # Preset Module
//!
//! Fixed lookup tables shared by every cipher: the 26-letter Latin alphabet
//! and its letter ↔ index bijection.

pub mod alphabet;

pub use alphabet::{ALPHABET, letter_at, letter_index};
