// SPDX-License-Identifier: CC0-1.0

/// Errors returned by splitting, merging and share decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Threshold or share count outside `1 <= threshold <= max <= 255`
    Configuration(String),
    /// A field element that must be nonzero was zero
    Domain(String),
    /// Fewer distinct share indices than the threshold
    InsufficientShares {
        /// The threshold passed to merge
        required: usize,
        /// The number of distinct indices supplied
        distinct: usize,
    },
    /// Share bytes that cannot be interpreted
    Malformed(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Configuration(err) => write!(f, "invalid configuration: {err}"),
            Self::Domain(err) => write!(f, "domain error: {err}"),
            Self::InsufficientShares { required, distinct } => {
                write!(
                    f,
                    "insufficient shares: need {required} distinct indices, got {distinct}"
                )
            }
            Self::Malformed(err) => write!(f, "malformed share: {err}"),
        }
    }
}

impl std::error::Error for Error {}
