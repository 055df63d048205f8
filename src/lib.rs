//! Bayesian skill ratings for multi-team games using the Weng-Lin
//! Thurstone-Mosteller models.

pub mod model;
pub mod utils;

pub use model::{
    constants::Constants,
    error::RateError,
    ordinal, predict_draw, predict_win, rate, rate_2v2, rating,
    structures::{
        model_kind::ModelKind,
        options::Options,
        rating::{Rating, Team},
        score_transform::ScoreTransform,
        synergy::Synergy
    }
};
