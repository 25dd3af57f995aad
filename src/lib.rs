// Written in 2025 by Joshua Doman <joshsdoman@gmail.com>
// SPDX-License-Identifier: CC0-1.0

//! # Secret Share
//!
//! Threshold secret sharing of arbitrary byte strings: a secret is split into
//! `N` shares such that any `T` of them reconstruct it exactly, while any
//! `T - 1` of them reveal nothing about it.
//!
//! ## How It Works
//!
//! 1. **Byte-wise Fields**: Each byte of the secret is treated independently as an
//!    element of GF(2^8), using the AES reduction polynomial
//! 2. **Random Polynomials**: For each byte, a polynomial of degree `T - 1` is drawn
//!    with the byte as its constant term and the other coefficients taken from an
//!    injected cryptographically secure random source
//! 3. **Evaluation**: Share `j` holds every polynomial evaluated at `x = j`, for `j`
//!    in `1..=N`. Index 0 is never used since it would be the secret itself
//! 4. **Interpolation**: Merging evaluates the Lagrange interpolation of `T` shares
//!    at `x = 0`, recovering each constant term
//!
//! ## Usage
//!
//! ```rust
//! use secret_share::{Share, merge, split};
//!
//! let secret = b"correct horse battery staple";
//!
//! // Split into 5 shares, any 3 of which recover the secret
//! let shares = split(&mut rand::rng(), secret, 5, 3).unwrap();
//!
//! // Shares encode as hex of their index byte followed by their data
//! let encoded: Vec<String> = shares.iter().map(|s| s.to_string()).collect();
//! let decoded: Vec<Share> = encoded[2..].iter().map(|s| s.parse().unwrap()).collect();
//!
//! let recovered = merge(&decoded, 3).unwrap();
//! assert_eq!(recovered, secret);
//! ```
//!
//! ## Security Considerations
//!
//! - Fewer than `T` shares are information-theoretically independent of the secret
//! - Coefficients are only as unpredictable as the random source; every split must
//!   draw fresh randomness
//! - Shares carry no integrity protection. A corrupted or substituted share yields
//!   a wrong secret without an error
//!

// Coding conventions
#![deny(unsafe_code)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(dead_code)]
#![deny(unused_imports)]
#![deny(missing_docs)]

#[cfg(not(any(feature = "std")))]
compile_error!("`std` must be enabled");

mod error;
pub mod field;
mod random;
mod share;
mod sharing;

pub use error::Error;
pub use random::{KeystreamDrbg, RandomSource};
pub use share::Share;
pub use sharing::{MAX_SHARES, merge, split};
