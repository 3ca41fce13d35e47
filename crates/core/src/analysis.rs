//! Detailed optimization analysis.

use serde::{Deserialize, Serialize};

use crate::{
    items::Item,
    selection::{self, SelectionResult},
    utils::{round2, round4},
};

/// Selection result enriched with aggregate statistics and a per-item
/// efficiency ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    /// The standard selection result.
    #[serde(rename = "resultado_optimizacion")]
    pub result: SelectionResult,

    /// Aggregate figures over the whole candidate set.
    #[serde(rename = "estadisticas")]
    pub statistics: Statistics,

    /// All items ranked by efficiency, best first.
    #[serde(rename = "eficiencias_objetos")]
    pub efficiencies: Vec<ItemEfficiency>,
}

/// Aggregate statistics of one optimization run.
///
/// Every percentage is rounded to two decimals and guarded to 0.0 when its
/// denominator is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of candidate items.
    #[serde(rename = "total_objetos_disponibles")]
    pub total_available: usize,

    /// Number of items selected.
    #[serde(rename = "objetos_seleccionados")]
    pub selected_count: usize,

    /// Selected share of the candidate set, as a percentage.
    #[serde(rename = "porcentaje_seleccion")]
    pub selection_percentage: f64,

    /// Sum of the gains of all candidates.
    #[serde(rename = "ganancia_total_disponible")]
    pub available_gain: u64,

    /// Gain captured by the selection.
    #[serde(rename = "ganancia_obtenida")]
    pub obtained_gain: u64,

    /// Captured share of the available gain, as a percentage.
    #[serde(rename = "porcentaje_ganancia_obtenida")]
    pub gain_percentage: f64,

    /// Sum of the costs of all candidates.
    #[serde(rename = "peso_total_disponible")]
    pub available_cost: u64,

    /// Cost spent by the selection.
    #[serde(rename = "peso_utilizado")]
    pub used_cost: u64,

    /// Spent share of the available cost, as a percentage.
    #[serde(rename = "porcentaje_peso_utilizado")]
    pub cost_percentage: f64,
}

/// One row of the efficiency ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEfficiency {
    /// Item name.
    #[serde(rename = "nombre")]
    pub name: String,

    /// Gain-to-cost ratio, rounded to four decimals.
    #[serde(rename = "eficiencia")]
    pub efficiency: f64,

    /// The item's gain.
    #[serde(rename = "ganancia")]
    pub gain: u64,

    /// The item's cost.
    #[serde(rename = "peso")]
    pub cost: u64,
}

/// Run the standard selection path and derive the detailed analysis on top.
///
/// The ranking covers every candidate regardless of selection and is sorted
/// descending by the rounded ratio. The sort is stable, so items with equal
/// efficiency keep their input order; that order carries no meaning.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "gains, costs and counts are bounded far below 2^52"
)]
pub fn analyze(capacity: u64, items: &[Item]) -> DetailedAnalysis {
    let result = selection::optimize(capacity, items);

    let total_available = items.len();
    let selected_count = result.selected.len();
    let available_gain: u64 = items.iter().map(|item| item.gain).sum();
    let available_cost: u64 = items.iter().map(|item| item.cost).sum();

    let statistics = Statistics {
        total_available,
        selected_count,
        selection_percentage: percentage(selected_count as f64, total_available as f64),
        available_gain,
        obtained_gain: result.total_gain,
        gain_percentage: percentage(result.total_gain as f64, available_gain as f64),
        available_cost,
        used_cost: result.total_cost,
        cost_percentage: percentage(result.total_cost as f64, available_cost as f64),
    };

    let mut efficiencies: Vec<ItemEfficiency> = items
        .iter()
        .map(|item| ItemEfficiency {
            name: item.name.clone(),
            efficiency: if item.cost > 0 {
                round4(item.gain as f64 / item.cost as f64)
            } else {
                0.0
            },
            gain: item.gain,
            cost: item.cost,
        })
        .collect();

    efficiencies.sort_by(|a, b| b.efficiency.total_cmp(&a.efficiency));

    DetailedAnalysis {
        result,
        statistics,
        efficiencies,
    }
}

fn percentage(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        round2(part / whole * 100.0)
    } else {
        0.0
    }
}
