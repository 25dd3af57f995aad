// SPDX-License-Identifier: CC0-1.0

use itertools::Itertools;
use tracing::{debug, trace};

use crate::{Error, Share, field};

/// Reconstructs a secret from at least `threshold` shares.
///
/// The first `threshold` shares with distinct indices are used; later
/// shares repeating an already chosen index are skipped. The result is the
/// original secret only if the chosen shares came from the same split with
/// the same threshold. Corrupted or forged shares are not detected.
///
/// # Errors
/// - [`Error::Configuration`] if `threshold` is 0
/// - [`Error::Domain`] if any share has index 0
/// - [`Error::InsufficientShares`] if fewer than `threshold` distinct indices are supplied
/// - [`Error::Malformed`] if the chosen shares differ in length
pub fn merge(shares: &[Share], threshold: usize) -> Result<Vec<u8>, Error> {
    if threshold == 0 {
        return Err(Error::Configuration("threshold cannot be 0".to_string()));
    }
    if shares.iter().any(|share| share.index == 0) {
        return Err(Error::Domain("share index cannot be 0".to_string()));
    }

    let chosen: Vec<&Share> = shares
        .iter()
        .unique_by(|share| share.index)
        .take(threshold)
        .collect();

    if chosen.len() < threshold {
        return Err(Error::InsufficientShares {
            required: threshold,
            distinct: chosen.len(),
        });
    }

    let secret_len = chosen[0].data.len();
    if let Some(share) = chosen.iter().find(|share| share.data.len() != secret_len) {
        return Err(Error::Malformed(format!(
            "share {} has {} bytes, expected {}",
            share.index,
            share.data.len(),
            secret_len
        )));
    }

    debug!(threshold, supplied = shares.len(), secret_len, "merging shares");

    let indices: Vec<u8> = chosen.iter().map(|share| share.index).collect();
    let weights = lagrange_weights_at_zero(&indices)?;
    trace!(?indices, "computed lagrange weights");

    let secret = (0..secret_len)
        .map(|i| {
            chosen
                .iter()
                .zip(&weights)
                .fold(0, |acc, (share, &w)| {
                    field::add(acc, field::mul(share.data[i], w))
                })
        })
        .collect();

    Ok(secret)
}

/// Returns the Lagrange basis polynomials evaluated at x = 0.
///
/// For distinct nonzero `xs`, the weight of `x_k` is the product over
/// `m != k` of `x_m / (x_m - x_k)`. The weights only depend on the indices,
/// so they are shared by every byte position.
fn lagrange_weights_at_zero(xs: &[u8]) -> Result<Vec<u8>, Error> {
    xs.iter()
        .enumerate()
        .map(|(k, &x_k)| {
            xs.iter()
                .enumerate()
                .filter(|&(m, _)| m != k)
                .try_fold(1u8, |acc, (_, &x_m)| -> Result<u8, Error> {
                    let term = field::mul(x_m, field::inverse(field::sub(x_m, x_k))?);
                    Ok(field::mul(acc, term))
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sharing::{split, test_helpers::Sequence};

    fn share(index: u8, data: &[u8]) -> Share {
        Share::new(index, data.to_vec()).unwrap()
    }

    #[test]
    fn test_merge_crafted_shares() {
        let shares = [
            share(1, &[0x40, 0x40]),
            share(2, &[0x43, 0x46]),
            share(3, &[0x42, 0x44]),
        ];
        for pair in [[0, 1], [0, 2], [1, 2], [2, 0]] {
            let chosen: Vec<Share> = pair.iter().map(|&i| shares[i].clone()).collect();
            assert_eq!(merge(&chosen, 2).unwrap(), vec![0x41, 0x42]);
        }
    }

    #[test]
    fn test_below_threshold_is_not_the_secret() {
        let secret = [0x41, 0x42];
        let mut rng = Sequence::new(vec![0x01, 0x02]);
        let shares = split(&mut rng, &secret, 3, 2).unwrap();

        assert!(matches!(
            merge(&shares[..1], 2),
            Err(Error::InsufficientShares {
                required: 2,
                distinct: 1
            })
        ));

        // Claiming a lower threshold silently interpolates the wrong polynomial
        let merged = merge(&shares[..1], 1).unwrap();
        assert_eq!(merged, vec![0x40, 0x40]);
        assert_ne!(merged[0], secret[0]);
        assert_ne!(merged[1], secret[1]);
    }

    #[test]
    fn test_missing_point_leaves_secret_uniform() {
        // With one of two points known, each guess for the other point
        // interpolates to a different constant term
        let known = share(1, &[0x5A]);
        let mut seen = [0usize; 256];
        for guess in 0..=255u8 {
            let merged = merge(&[known.clone(), share(2, &[guess])], 2).unwrap();
            seen[merged[0] as usize] += 1;
        }
        assert!(seen.iter().all(|&n| n == 1));
    }

    #[test]
    fn test_merge_invalid_inputs() {
        let share1 = share(1, &[10, 20]);
        let share2 = share(2, &[30, 40]);
        let share_short = share(3, &[50]);
        let share_zero = Share {
            index: 0,
            data: vec![10, 20],
        };

        assert!(matches!(
            merge(&[share1.clone(), share2.clone()], 0),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            merge(&[share1.clone(), share_zero], 2),
            Err(Error::Domain(_))
        ));
        assert!(matches!(
            merge(&[], 1),
            Err(Error::InsufficientShares {
                required: 1,
                distinct: 0
            })
        ));
        assert!(matches!(
            merge(&[share1.clone(), share1.clone()], 2),
            Err(Error::InsufficientShares {
                required: 2,
                distinct: 1
            })
        ));
        assert!(matches!(
            merge(&[share1.clone(), share_short], 2),
            Err(Error::Malformed(_))
        ));
        assert!(matches!(
            merge(&[share1, share2], 256),
            Err(Error::InsufficientShares { .. })
        ));
    }

    #[test]
    fn test_duplicates_are_skipped() {
        let secret = b"duplicate";
        let shares = split(&mut rand::rng(), secret, 4, 3).unwrap();
        let supplied = vec![
            shares[0].clone(),
            shares[0].clone(),
            shares[2].clone(),
            shares[0].clone(),
            shares[3].clone(),
        ];
        assert_eq!(merge(&supplied, 3).unwrap(), secret.to_vec());
    }

    #[test]
    fn test_extra_shares_are_ignored() {
        let secret = b"extra";
        let mut shares = split(&mut rand::rng(), secret, 5, 2).unwrap();
        // Only the first two distinct indices are used
        shares[4].data = vec![0; 3];
        assert_eq!(merge(&shares, 2).unwrap(), secret.to_vec());
    }

    #[test]
    fn test_lagrange_weights() {
        // Two points at 1 and 2: w_1 = 2 / 3, w_2 = 1 / 3
        let weights = lagrange_weights_at_zero(&[1, 2]).unwrap();
        let inv3 = field::inverse(3).unwrap();
        assert_eq!(weights, vec![field::mul(2, inv3), inv3]);

        // Weights of any point set sum to 1, since a constant interpolates to itself
        let weights = lagrange_weights_at_zero(&[7, 19, 200, 255]).unwrap();
        assert_eq!(weights.iter().fold(0, |acc, &w| field::add(acc, w)), 1);
    }

    #[test]
    fn test_lagrange_weights_repeated_index() {
        assert!(matches!(
            lagrange_weights_at_zero(&[4, 4]),
            Err(Error::Domain(_))
        ));
    }
}
