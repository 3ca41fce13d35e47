//! Bottom-up 0/1 knapsack solver.

use crate::items::Item;

/// Outcome of one solver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Maximum achievable total gain.
    pub max_gain: u64,

    /// Indices into the input slice of the items achieving it, in input order.
    pub selected: Vec<usize>,
}

impl Solution {
    fn empty() -> Self {
        Self {
            max_gain: 0,
            selected: Vec::new(),
        }
    }
}

/// Solve a 0/1 knapsack instance: choose the subset of `items` maximizing
/// total gain while keeping total cost within `capacity`.
///
/// The table cell `dp[i][w]` holds the best gain achievable using only the
/// first `i` items with budget `w`. It is stored as a flat vector of
/// `(n + 1) * (capacity + 1)` entries, allocated per call and dropped on
/// return, so concurrent calls never share state. The request layer caps the
/// capacity at [`crate::items::MAX_CAPACITY`] to keep the allocation
/// tractable.
///
/// The selection is reconstructed by walking the table from the last item
/// down: a cell differing from the one above it means that row's item was
/// taken. Because the walk tests value equality, an item whose inclusion
/// leaves the optimum unchanged is treated as left out; among equally good
/// subsets this deterministically favors the one found by preferring
/// exclusion on ties.
#[must_use]
#[expect(
    clippy::indexing_slicing,
    clippy::cast_possible_truncation,
    reason = "indices stay within the table dimensions; capacity and costs are bounded by the request layer"
)]
pub fn solve(capacity: u64, items: &[Item]) -> Solution {
    if items.is_empty() {
        return Solution::empty();
    }

    let n = items.len();
    let cap = capacity as usize;
    let width = cap + 1;

    let mut dp = vec![0_u64; (n + 1) * width];

    for (i, item) in items.iter().enumerate() {
        let above = i * width;
        let row = (i + 1) * width;
        let cost = item.cost as usize;

        for w in 0..width {
            let mut best = dp[above + w];

            if cost <= w {
                best = best.max(dp[above + w - cost] + item.gain);
            }

            dp[row + w] = best;
        }
    }

    let mut selected = Vec::new();
    let mut w = cap;

    for i in (1..=n).rev() {
        if dp[i * width + w] != dp[(i - 1) * width + w] {
            selected.push(i - 1);
            w -= items[i - 1].cost as usize;
        }
    }

    selected.reverse();

    Solution {
        max_gain: dp[n * width + cap],
        selected,
    }
}
