//! Investment items.

use serde::{Deserialize, Serialize};

/// Largest budget capacity the engine accepts.
///
/// The solver's working table grows linearly with the capacity, so the
/// request layer rejects anything above this bound before the engine runs.
pub const MAX_CAPACITY: u64 = 10_000_000;

/// Largest cost a single item may carry.
pub const MAX_ITEM_COST: u64 = 1_000_000;

/// Largest gain a single item may carry.
pub const MAX_ITEM_GAIN: u64 = 1_000_000;

/// Longest item name, in characters.
pub const MAX_NAME_LEN: usize = 50;

/// A named investment candidate with an acquisition cost and an expected gain.
///
/// Identity is the name. The request layer guarantees the preconditions the
/// engine relies on: names are trimmed, non-empty, at most [`MAX_NAME_LEN`]
/// characters and pairwise distinct within one request; costs lie in
/// `1..=MAX_ITEM_COST`; gains lie in `0..=MAX_ITEM_GAIN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Project or investment name.
    #[serde(rename = "nombre")]
    pub name: String,

    /// Cost of acquiring the item, charged against the capacity.
    #[serde(rename = "peso")]
    pub cost: u64,

    /// Expected gain from the item.
    #[serde(rename = "ganancia")]
    pub gain: u64,
}

impl Item {
    /// Create a new item.
    #[must_use]
    pub fn new(name: impl Into<String>, cost: u64, gain: u64) -> Self {
        Self {
            name: name.into(),
            cost,
            gain,
        }
    }
}
