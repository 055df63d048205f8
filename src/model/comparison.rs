use crate::model::{
    constants::Constants,
    score_transform::{performance_gap, score_to_performance},
    statistics::{v, vt, w, wt},
    structures::{
        options::{Options, ScoreToPerformance},
        rating::{Rating, Team},
        team_rating::TeamRating
    },
    util::gamma
};

/// Everything a model needs to compare two teams, shared across one game.
pub struct PairwiseContext<'a> {
    pub options: &'a Options,
    pub constants: &'a Constants,
    pub team_count: usize,
    pub scores: Option<&'a [f64]>,
    pub to_performance: Option<ScoreToPerformance>
}

impl<'a> PairwiseContext<'a> {
    pub fn new(options: &'a Options, constants: &'a Constants, team_count: usize) -> PairwiseContext<'a> {
        PairwiseContext {
            options,
            constants,
            team_count,
            scores: options.score.as_deref(),
            to_performance: score_to_performance(options)
        }
    }
}

/// One comparison of team `i` against opponent `q`.
///
/// Returns the `(omega, delta)` contribution: the drift applied to the team's
/// mean and the shrink applied to its variance. `ciq` is the combined
/// uncertainty of the pair, already scaled by the calling model.
pub fn compare(
    ctx: &PairwiseContext,
    (i, i_rating): (usize, &TeamRating),
    (q, q_rating): (usize, &TeamRating),
    ciq: f64
) -> (f64, f64) {
    let delta_mu = (i_rating.mu - q_rating.mu) / ciq;
    let sig_sq_to_ciq = i_rating.sigma_sq / ciq;
    let i_gamma = gamma(ctx.options, ciq, ctx.team_count, i_rating);
    let margin = ctx.constants.epsilon / ciq;

    if let (Some(transform), Some(scores)) = (&ctx.to_performance, ctx.scores) {
        let gap = performance_gap(transform, scores[i], scores[q]);
        let residual = gap - (i_rating.mu - q_rating.mu);

        return (sig_sq_to_ciq * residual / ciq, i_gamma * sig_sq_to_ciq / ciq);
    }

    if q_rating.rank == i_rating.rank {
        return (
            sig_sq_to_ciq * vt(delta_mu, margin),
            (i_gamma * sig_sq_to_ciq / ciq) * wt(delta_mu, margin)
        );
    }

    // Orient the pair so v/w always see "i beat q", then re-sign the drift
    let sign = if q_rating.rank > i_rating.rank { 1.0 } else { -1.0 };
    (
        sign * sig_sq_to_ciq * v(sign * delta_mu, margin),
        (i_gamma * sig_sq_to_ciq / ciq) * w(sign * delta_mu, margin)
    )
}

/// Distributes a team's accumulated correction over its players in
/// proportion to each player's share of the team variance.
pub fn apply_correction(team_rating: &TeamRating, omega: f64, delta: f64, epsilon: f64) -> Team {
    team_rating
        .team
        .iter()
        .map(|player| {
            let sigma_sq = player.sigma * player.sigma;
            let share = sigma_sq / team_rating.sigma_sq;

            Rating {
                mu: player.mu + share * omega,
                sigma: player.sigma * (1.0 - share * delta).max(epsilon).sqrt()
            }
        })
        .collect()
}
