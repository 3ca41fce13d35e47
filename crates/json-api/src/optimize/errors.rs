//! Optimization request errors.

use salvo::{Response, http::StatusCode, writing::Json};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use portfolio::items::{MAX_CAPACITY, MAX_ITEM_COST, MAX_ITEM_GAIN, MAX_NAME_LEN};

/// Reasons an optimization request is rejected before the engine runs.
#[derive(Debug, Error)]
pub(crate) enum ValidationError {
    #[error("capacity must be between 1 and {}", MAX_CAPACITY)]
    CapacityOutOfRange,

    #[error("at least one item is required")]
    NoItems,

    #[error("item names must not be empty")]
    EmptyName,

    #[error("item name `{0}` exceeds {max} characters", max = MAX_NAME_LEN)]
    NameTooLong(String),

    #[error("item `{0}`: cost must be between 1 and {max}", max = MAX_ITEM_COST)]
    CostOutOfRange(String),

    #[error("item `{0}`: gain must be between 0 and {max}", max = MAX_ITEM_GAIN)]
    GainOutOfRange(String),

    #[error("item names must be unique, `{0}` appears more than once")]
    DuplicateName(String),
}

/// Structured validation failure returned to the client.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ValidationFailure {
    /// Short, stable description of the failure class.
    pub error: String,

    /// Human-readable rejection reason.
    pub detalles: String,

    /// Machine-readable failure kind.
    pub tipo: String,
}

pub(crate) fn render_validation_failure(res: &mut Response, error: &ValidationError) {
    warn!("rejected optimization request: {error}");

    res.status_code(StatusCode::UNPROCESSABLE_ENTITY);
    res.render(Json(ValidationFailure {
        error: "invalid optimization request".to_string(),
        detalles: error.to_string(),
        tipo: "INPUT_VALIDATION".to_string(),
    }));
}
