pub mod model_kind;
pub mod options;
pub mod rating;
pub mod score_transform;
pub mod synergy;
pub mod team_rating;
