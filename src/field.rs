// SPDX-License-Identifier: CC0-1.0

//! Arithmetic in GF(2^8) with the AES reduction polynomial
//! x^8 + x^4 + x^3 + x + 1 (0x11B).
//!
//! Addition is XOR. Multiplication of nonzero elements goes through log and
//! antilog tables built at compile time from the generator 0x03, which has
//! order 255 in the multiplicative group.

use crate::Error;

// 0x11B without the x^8 bit
const REDUCTION: u8 = 0x1B;
const GENERATOR: u8 = 0x03;
const ORDER: usize = 255;

// Multiplication by shift-and-add, only used to build the tables.
const fn mul_slow(mut a: u8, mut b: u8) -> u8 {
    let mut p: u8 = 0;
    while a != 0 && b != 0 {
        if b & 1 == 1 {
            p ^= a;
        }
        if a & 0x80 != 0 {
            a = (a << 1) ^ REDUCTION;
        } else {
            a <<= 1;
        }
        b >>= 1;
    }
    p
}

const fn build_antilog() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut val: u8 = 1;
    let mut i = 0;
    while i < ORDER {
        table[i] = val;
        val = mul_slow(val, GENERATOR);
        i += 1;
    }
    // g^255 = g^0
    table[ORDER] = table[0];
    table
}

const fn build_log() -> [u8; 256] {
    let antilog = build_antilog();
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < ORDER {
        table[antilog[i] as usize] = i as u8;
        i += 1;
    }
    table
}

static ANTILOG: [u8; 256] = build_antilog();
static LOG: [u8; 256] = build_log();

/// Adds two field elements
#[inline]
pub fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Subtracts two field elements, which in characteristic 2 is addition
#[inline]
pub fn sub(a: u8, b: u8) -> u8 {
    add(a, b)
}

/// Multiplies two field elements
#[inline]
pub fn mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    ANTILOG[(LOG[a as usize] as usize + LOG[b as usize] as usize) % ORDER]
}

/// Returns the multiplicative inverse of a nonzero field element
pub fn inverse(a: u8) -> Result<u8, Error> {
    if a == 0 {
        return Err(Error::Domain("cannot invert 0 in GF(2^8)".to_string()));
    }
    Ok(ANTILOG[(ORDER - LOG[a as usize] as usize) % ORDER])
}
