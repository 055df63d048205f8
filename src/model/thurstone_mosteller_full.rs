use tracing::trace;

use crate::model::{
    comparison::{apply_correction, compare, PairwiseContext},
    constants::Constants,
    structures::{options::Options, rating::Team},
    util::team_rating
};

/// Thurstone-Mosteller with full pairing: every team is compared against
/// every other team of the game.
///
/// The game must be in finishing order with `options.rank` sorted ascending
/// to match, as prepared by [`crate::model::rate::rate`]. Ranks are not
/// re-sorted here, see [`crate::model::util::rankings`].
pub fn thurstone_mosteller_full(game: &[Team], options: &Options, constants: &Constants) -> Vec<Team> {
    let team_ratings = team_rating(game, options.rank.as_deref());
    let ctx = PairwiseContext::new(options, constants, team_ratings.len());

    team_ratings
        .iter()
        .enumerate()
        .map(|(i, i_rating)| {
            let (omega, delta) = team_ratings
                .iter()
                .enumerate()
                .filter(|(q, _)| *q != i)
                .fold((0.0, 0.0), |(omega, delta), (q, q_rating)| {
                    let ciq = (i_rating.sigma_sq + q_rating.sigma_sq + constants.two_beta_sq).sqrt();
                    let (d_omega, d_delta) = compare(&ctx, (i, i_rating), (q, q_rating), ciq);

                    (omega + d_omega, delta + d_delta)
                });

            trace!(team = i, omega, delta, "Full pairing correction");
            apply_correction(i_rating, omega, delta, constants.epsilon)
        })
        .collect()
}
