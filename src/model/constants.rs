use tracing::trace;

use crate::model::structures::options::Options;

// Model constants
pub const Z: f64 = 3.0;
pub const MU: f64 = 25.0;
pub const SIGMA: f64 = MU / Z;
pub const BETA_DIVISOR: f64 = 2.0;
pub const EPSILON: f64 = 0.0001;
// Uncertainty dynamics
pub const TAU_DIVISOR: f64 = 300.0;
pub const LIMIT_SIGMA: bool = true;
// Ordinal scaling
pub const ALPHA: f64 = 1.0;
pub const TARGET: f64 = 0.0;
// Match-points extension (beta scaled by points-to-win)
pub const MATCH_POINTS_REF: f64 = 3.0;
pub const BETA_POWER: f64 = 0.5;

/// The fully resolved parameter set for one rating call.
///
/// Built once from a sparse [`Options`] via [`Constants::resolve`] and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constants {
    pub z: f64,
    pub mu: f64,
    pub sigma: f64,
    pub epsilon: f64,
    pub alpha: f64,
    pub target: f64,
    pub tau: f64,
    pub beta: f64,
    pub beta_sq: f64,
    /// `2 * beta^2`, needed by every pairwise comparison
    pub two_beta_sq: f64,
    pub limit_sigma: bool
}

impl Default for Constants {
    fn default() -> Self {
        Self::resolve(&Options::default())
    }
}

impl Constants {
    /// Resolves every constant against the module defaults.
    ///
    /// # Resolution order
    /// - `sigma` falls back to `mu / z`, `tau` to `mu / 300`.
    /// - `beta` falls back to `sigma / BETA_DIVISOR`.
    /// - If a `beta0` baseline or a positive points-to-win value is given, beta is
    ///   recomputed as `beta0 * (ref / points)^beta_power` so that longer matches
    ///   carry less noise. Without points-to-win, `beta0` is used as is.
    pub fn resolve(options: &Options) -> Constants {
        let z = options.z.unwrap_or(Z);
        let mu = options.mu.unwrap_or(MU);
        let epsilon = options.epsilon.unwrap_or(EPSILON);
        let alpha = options.alpha.unwrap_or(ALPHA);
        let target = options.target.unwrap_or(TARGET);

        let sigma = options.sigma.unwrap_or(mu / z);
        let tau = options.tau.unwrap_or(mu / TAU_DIVISOR);
        let beta = options.beta.unwrap_or(sigma / BETA_DIVISOR);
        let beta = match (options.beta0, options.match_points()) {
            (None, None) => beta,
            (beta0, match_points) => {
                let baseline = beta0.unwrap_or(beta);
                scaled_beta(baseline, match_points, options)
            }
        };

        let beta_sq = beta * beta;
        let limit_sigma = options
            .limit_sigma
            .or(options.prevent_sigma_increase)
            .unwrap_or(LIMIT_SIGMA);

        trace!(mu, sigma, beta, tau, limit_sigma, "Resolved rating constants");

        Constants {
            z,
            mu,
            sigma,
            epsilon,
            alpha,
            target,
            tau,
            beta,
            beta_sq,
            two_beta_sq: 2.0 * beta_sq,
            limit_sigma
        }
    }
}

/// Scales the baseline beta by match length. Non-positive match lengths
/// are treated as absent.
fn scaled_beta(baseline: f64, match_points: Option<f64>, options: &Options) -> f64 {
    match match_points {
        Some(points) if points > 0.0 => {
            let reference = options.match_points_ref().unwrap_or(MATCH_POINTS_REF);
            let power = options.beta_power.unwrap_or(BETA_POWER);

            baseline * (reference / points).powf(power)
        }
        _ => baseline
    }
}
