use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Built-in shapes mapping an absolute score gap to a performance gap.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ScoreTransform {
    /// `scale * gap`
    Linear,
    /// `scale * ln(1 + gap)`
    Log,
    /// `scale * sqrt(gap)`
    Sqrt,
    /// `scale * tanh(gap / saturation)`, blowouts saturate at `scale`
    Tanh
}
