//! Optimization request payloads.

use rustc_hash::FxHashSet;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use portfolio::items::{Item, MAX_CAPACITY, MAX_ITEM_COST, MAX_ITEM_GAIN, MAX_NAME_LEN};

use crate::optimize::errors::ValidationError;

/// A candidate item as submitted by the client.
///
/// Numbers are accepted as signed and range-checked so that a negative value
/// produces a structured validation failure rather than a body-parse error.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemPayload {
    /// Project or investment name
    pub nombre: String,

    /// Cost of the item
    pub peso: i64,

    /// Expected gain of the item
    pub ganancia: i64,
}

/// Optimization request: a budget capacity and the candidate items.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OptimizeRequest {
    /// Total budget capacity
    pub capacidad: i64,

    /// Candidate items
    pub objetos: Vec<ItemPayload>,
}

impl OptimizeRequest {
    /// Validate the request and convert it into engine inputs.
    ///
    /// Names are trimmed before any check, and the trimmed name is what the
    /// engine sees and what comes back in the selection.
    #[expect(
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss,
        reason = "every bound fits in i64 and values are range-checked before the cast"
    )]
    pub(crate) fn into_domain(self) -> Result<(u64, Vec<Item>), ValidationError> {
        if self.capacidad < 1 || self.capacidad > MAX_CAPACITY as i64 {
            return Err(ValidationError::CapacityOutOfRange);
        }

        if self.objetos.is_empty() {
            return Err(ValidationError::NoItems);
        }

        let mut items = Vec::with_capacity(self.objetos.len());
        let mut seen = FxHashSet::default();

        for payload in self.objetos {
            let name = payload.nombre.trim().to_string();

            if name.is_empty() {
                return Err(ValidationError::EmptyName);
            }

            if name.chars().count() > MAX_NAME_LEN {
                return Err(ValidationError::NameTooLong(name));
            }

            if payload.peso < 1 || payload.peso > MAX_ITEM_COST as i64 {
                return Err(ValidationError::CostOutOfRange(name));
            }

            if payload.ganancia < 0 || payload.ganancia > MAX_ITEM_GAIN as i64 {
                return Err(ValidationError::GainOutOfRange(name));
            }

            if !seen.insert(name.clone()) {
                return Err(ValidationError::DuplicateName(name));
            }

            items.push(Item::new(name, payload.peso as u64, payload.ganancia as u64));
        }

        Ok((self.capacidad as u64, items))
    }
}
