use std::{fmt, sync::Arc};

use serde::Deserialize;

use crate::model::{
    constants::Constants,
    structures::{rating::{Rating, Team}, score_transform::ScoreTransform, synergy::Synergy}
};

/// A comparison model: maps a game (already sorted by finishing order) to updated teams.
pub type Model = Arc<dyn Fn(&[Team], &Options, &Constants) -> Vec<Team> + Send + Sync>;

/// Scaling applied to the variance-shrink term of a comparison.
///
/// Arguments are `(ciq, team_count, team_mu, team_sigma_sq, team, rank)`.
pub type Gamma = Arc<dyn Fn(f64, usize, f64, f64, &[Rating], usize) -> f64 + Send + Sync>;

/// Maps an absolute score gap to a performance gap.
pub type ScoreToPerformance = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Sparse, caller-supplied settings for a single rating call.
///
/// Every field is optional. Missing numeric values are resolved by
/// [`Constants::resolve`]; missing strategies fall back to the built-ins.
/// Both spellings of the renamed keys are accepted (`match_points` /
/// `match_length`, `match_points_ref` / `match_ref`, `limit_sigma` /
/// `prevent_sigma_increase`).
#[derive(Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    pub z: Option<f64>,
    pub mu: Option<f64>,
    pub sigma: Option<f64>,
    pub epsilon: Option<f64>,
    pub alpha: Option<f64>,
    pub target: Option<f64>,
    pub tau: Option<f64>,
    pub beta: Option<f64>,
    pub beta0: Option<f64>,
    pub beta_power: Option<f64>,
    pub match_points: Option<f64>,
    pub match_length: Option<f64>,
    pub match_points_ref: Option<f64>,
    pub match_ref: Option<f64>,
    pub limit_sigma: Option<bool>,
    /// Deprecated spelling of `limit_sigma`
    pub prevent_sigma_increase: Option<bool>,

    /// One entry per team, lower is better. Equal values are ties.
    pub rank: Option<Vec<f64>>,
    /// One entry per team, higher is better. Only used for ordering when `rank` is absent.
    pub score: Option<Vec<f64>>,
    pub score_transform: Option<ScoreTransform>,
    pub score_scale: Option<f64>,
    pub score_saturation: Option<f64>,
    /// Partial-play weights, one per player. Passed through to the model untouched.
    pub weight: Option<Vec<Vec<f64>>>,

    #[serde(skip)]
    pub model: Option<Model>,
    #[serde(skip)]
    pub gamma: Option<Gamma>,
    #[serde(skip)]
    pub score_to_performance: Option<ScoreToPerformance>,
    #[serde(skip)]
    pub synergy: Option<Arc<dyn Synergy + Send + Sync>>
}

impl Options {
    pub fn with_rank(mut self, rank: &[f64]) -> Self {
        self.rank = Some(rank.to_vec());
        self
    }

    pub fn with_score(mut self, score: &[f64]) -> Self {
        self.score = Some(score.to_vec());
        self
    }

    pub fn with_model<F>(mut self, model: F) -> Self
    where
        F: Fn(&[Team], &Options, &Constants) -> Vec<Team> + Send + Sync + 'static
    {
        self.model = Some(Arc::new(model));
        self
    }

    pub fn with_gamma<F>(mut self, gamma: F) -> Self
    where
        F: Fn(f64, usize, f64, f64, &[Rating], usize) -> f64 + Send + Sync + 'static
    {
        self.gamma = Some(Arc::new(gamma));
        self
    }

    pub fn with_score_to_performance<F>(mut self, transform: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static
    {
        self.score_to_performance = Some(Arc::new(transform));
        self
    }

    pub fn with_synergy<S>(mut self, synergy: Arc<S>) -> Self
    where
        S: Synergy + Send + Sync + 'static
    {
        self.synergy = Some(synergy);
        self
    }

    /// Points needed to win the match, under either spelling.
    pub fn match_points(&self) -> Option<f64> {
        self.match_points.or(self.match_length)
    }

    /// Reference points-to-win for beta scaling, under either spelling.
    pub fn match_points_ref(&self) -> Option<f64> {
        self.match_points_ref.or(self.match_ref)
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("z", &self.z)
            .field("mu", &self.mu)
            .field("sigma", &self.sigma)
            .field("epsilon", &self.epsilon)
            .field("tau", &self.tau)
            .field("beta", &self.beta)
            .field("beta0", &self.beta0)
            .field("match_points", &self.match_points())
            .field("limit_sigma", &self.limit_sigma.or(self.prevent_sigma_increase))
            .field("rank", &self.rank)
            .field("score", &self.score)
            .field("score_transform", &self.score_transform)
            .field("model", &self.model.is_some())
            .field("gamma", &self.gamma.is_some())
            .field("synergy", &self.synergy.is_some())
            .finish_non_exhaustive()
    }
}
