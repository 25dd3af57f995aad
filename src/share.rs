// SPDX-License-Identifier: CC0-1.0

use std::{cmp::Ordering, fmt, str::FromStr};

use crate::Error;

/// A single share of a split secret.
///
/// `index` is the nonzero field element the share's polynomials were
/// evaluated at and `data` holds one evaluation per byte of the secret.
/// Shares order by index, then by data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Share {
    /// The evaluation point (never 0)
    pub index: u8,
    /// One evaluation per secret byte
    pub data: Vec<u8>,
}

impl Share {
    /// Creates a share, rejecting index 0, which would be the secret itself
    pub fn new(index: u8, data: Vec<u8>) -> Result<Self, Error> {
        if index == 0 {
            return Err(Error::Domain("share index cannot be 0".to_string()));
        }
        Ok(Self { index, data })
    }

    /// Encodes the share as its index byte followed by its data
    pub fn to_bytes(&self) -> Vec<u8> {
        [vec![self.index], self.data.clone()].concat()
    }

    /// Decodes a share produced by [`Share::to_bytes`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let Some((&index, data)) = bytes.split_first() else {
            return Err(Error::Malformed("missing index byte".to_string()));
        };
        Self::new(index, data.to_vec())
    }
}

impl PartialOrd for Share {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Share {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index
            .cmp(&other.index)
            .then_with(|| self.data.cmp(&other.data))
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.to_bytes()))
    }
}

impl FromStr for Share {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s.trim()).map_err(|e| Error::Malformed(e.to_string()))?;
        Self::from_bytes(&bytes)
    }
}
