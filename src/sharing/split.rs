// SPDX-License-Identifier: CC0-1.0

use tracing::debug;

use super::polynomial::Polynomial;
use crate::{Error, RandomSource, Share};

/// Largest share count, one per nonzero field element
pub const MAX_SHARES: usize = 255;

/// Splits a secret into `max` shares, any `threshold` of which reconstruct it.
///
/// Each byte of the secret becomes the constant term of its own polynomial
/// of degree `threshold - 1`, whose remaining coefficients are drawn from
/// `rng`. Share `j` (for `j` in `1..=max`) holds the evaluations at `x = j`.
///
/// # Errors
/// Returns [`Error::Configuration`] unless `1 <= threshold <= max <= 255`.
pub fn split(
    rng: &mut dyn RandomSource,
    secret: &[u8],
    max: usize,
    threshold: usize,
) -> Result<Vec<Share>, Error> {
    if threshold == 0 {
        return Err(Error::Configuration("threshold cannot be 0".to_string()));
    }
    if max > MAX_SHARES {
        return Err(Error::Configuration(format!(
            "cannot create more than {MAX_SHARES} shares, got {max}"
        )));
    }
    if threshold > max {
        return Err(Error::Configuration(format!(
            "threshold ({threshold}) cannot be greater than number of shares ({max})"
        )));
    }

    debug!(threshold, max, secret_len = secret.len(), "splitting secret");

    let mut shares: Vec<Share> = (1..=max as u8)
        .map(|index| Share {
            index,
            data: Vec::with_capacity(secret.len()),
        })
        .collect();

    for &byte in secret {
        let poly = Polynomial::random(byte, threshold - 1, rng);
        for share in shares.iter_mut() {
            share.data.push(poly.evaluate(share.index));
        }
    }

    Ok(shares)
}
