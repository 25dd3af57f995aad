// SPDX-License-Identifier: CC0-1.0

use crate::{RandomSource, field};

/// A polynomial over GF(2^8) whose constant term is one byte of the secret
pub struct Polynomial {
    // [a_0, a_1, ..., a_{k-1}]
    coefficients: Vec<u8>,
}

impl Polynomial {
    /// Draws `degree` random coefficients above the constant term
    pub fn random(constant: u8, degree: usize, rng: &mut dyn RandomSource) -> Self {
        let mut coefficients = Vec::with_capacity(degree + 1);
        coefficients.push(constant);
        coefficients.extend((0..degree).map(|_| rng.next_byte()));
        Self { coefficients }
    }

    /// Evaluates the polynomial at `x` using Horner's method
    pub fn evaluate(&self, x: u8) -> u8 {
        self.coefficients
            .iter()
            .rev()
            .fold(0, |acc, &coeff| field::add(field::mul(acc, x), coeff))
    }
}
