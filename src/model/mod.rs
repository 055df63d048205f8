pub mod comparison;
pub mod constants;
pub mod error;
pub mod predict;
pub mod rate;
pub mod score_transform;
pub mod statistics;
pub mod structures;
pub mod thurstone_mosteller_full;
pub mod thurstone_mosteller_part;
pub mod util;

pub use predict::{ordinal, predict_draw, predict_win};
pub use rate::{rate, rate_2v2, rating};
