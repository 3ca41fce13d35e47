//! Portfolio selection.

use serde::{Deserialize, Serialize};

use crate::{
    items::Item,
    solver,
    utils::{round2, round4},
};

/// The chosen portfolio and its summary figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    /// Names of the selected items, in input order.
    #[serde(rename = "seleccionados")]
    pub selected: Vec<String>,

    /// Total gain of the selection.
    #[serde(rename = "ganancia_total")]
    pub total_gain: u64,

    /// Total cost of the selection; never exceeds the capacity.
    #[serde(rename = "peso_total")]
    pub total_cost: u64,

    /// Share of the capacity consumed by the selection, as a percentage
    /// rounded to two decimals. 0.0 when the capacity is zero.
    #[serde(rename = "capacidad_utilizada")]
    pub utilization: f64,

    /// Gain-to-cost ratio of the selection, rounded to four decimals.
    /// 0.0 when nothing was selected.
    #[serde(rename = "eficiencia")]
    pub efficiency: f64,
}

/// Choose the subset of `items` maximizing total gain within `capacity` and
/// summarize it.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "gains and costs are bounded far below 2^52"
)]
pub fn optimize(capacity: u64, items: &[Item]) -> SelectionResult {
    let solution = solver::solve(capacity, items);

    let chosen: Vec<&Item> = solution
        .selected
        .iter()
        .filter_map(|&index| items.get(index))
        .collect();

    let total_cost: u64 = chosen.iter().map(|item| item.cost).sum();

    let utilization = if capacity > 0 {
        round2(total_cost as f64 / capacity as f64 * 100.0)
    } else {
        0.0
    };

    let efficiency = if total_cost > 0 {
        round4(solution.max_gain as f64 / total_cost as f64)
    } else {
        0.0
    };

    SelectionResult {
        selected: chosen.iter().map(|item| item.name.clone()).collect(),
        total_gain: solution.max_gain,
        total_cost,
        utilization,
        efficiency,
    }
}
