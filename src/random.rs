// SPDX-License-Identifier: CC0-1.0

use chacha20::{
    ChaCha20,
    cipher::{KeyIvInit, StreamCipher},
};
use rand::{CryptoRng, RngCore, rand_core::impls};
use sha2::{Digest, Sha256};

/// A source of uniformly distributed field elements used as polynomial
/// coefficients.
///
/// Every cryptographically secure `rand` generator is a source, so
/// `&mut rand::rng()` can be passed wherever a `&mut dyn RandomSource` is
/// expected. Deterministic test doubles implement the trait directly.
pub trait RandomSource {
    /// Returns the next uniformly random byte
    fn next_byte(&mut self) -> u8;
}

impl<R: RngCore + CryptoRng> RandomSource for R {
    fn next_byte(&mut self) -> u8 {
        let mut byte = [0u8; 1];
        self.fill_bytes(&mut byte);
        byte[0]
    }
}

/// A deterministic random bit generator.
///
/// The key is the SHA-256 digest of the seed material and the output is the
/// ChaCha20 keystream under a zero nonce. Two generators built from the same
/// seed material produce the same bytes, so a seeded split is reproducible.
/// The keystream is exhausted after 256 GiB of output.
pub struct KeystreamDrbg {
    cipher: ChaCha20,
}

impl KeystreamDrbg {
    /// Creates a generator keyed by the hash of `seed`
    pub fn from_seed_material(seed: &[u8]) -> Self {
        let key: [u8; 32] = Sha256::digest(seed).into();
        let nonce = [0u8; 12];
        Self {
            cipher: ChaCha20::new(&key.into(), &nonce.into()),
        }
    }
}

impl RngCore for KeystreamDrbg {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
        self.cipher.apply_keystream(dst);
    }
}

impl CryptoRng for KeystreamDrbg {}
