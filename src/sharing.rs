// SPDX-License-Identifier: CC0-1.0

mod merge;
mod polynomial;
mod split;

pub use merge::merge;
pub use split::{MAX_SHARES, split};
