use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::model::{
    structures::options::Model, thurstone_mosteller_full::thurstone_mosteller_full,
    thurstone_mosteller_part::thurstone_mosteller_part
};

/// The built-in comparison topologies.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModelKind {
    /// Every team is compared against every other team
    #[default]
    Full,
    /// Each team is only compared against its rank-adjacent neighbours
    Partial
}

impl ModelKind {
    /// The model function. It expects a game already sorted into finishing
    /// order, so callers outside [`crate::model::rate::rate`] sort first.
    pub fn model(self) -> Model {
        match self {
            ModelKind::Full => Arc::new(thurstone_mosteller_full),
            ModelKind::Partial => Arc::new(thurstone_mosteller_part)
        }
    }
}
