use tracing::trace;

use crate::model::{
    comparison::{apply_correction, compare, PairwiseContext},
    constants::Constants,
    structures::{options::Options, rating::Team},
    util::{ladder_pairs, team_rating}
};

/// Thurstone-Mosteller with partial pairing: each team is only compared
/// against its neighbours in finishing order.
///
/// With three or more teams `ciq` is doubled relative to the full model, so a
/// fully ranked ladder moves ratings by a comparable amount despite the fewer
/// comparisons. Two teams form a complete ladder and match the full model.
///
/// Like the full model this expects the game in finishing order with
/// `options.rank` sorted ascending. Call it through [`crate::model::rate::rate`]
/// unless the input is already ordered.
pub fn thurstone_mosteller_part(game: &[Team], options: &Options, constants: &Constants) -> Vec<Team> {
    let team_ratings = team_rating(game, options.rank.as_deref());
    let ctx = PairwiseContext::new(options, constants, team_ratings.len());
    let indexed: Vec<_> = team_ratings.iter().enumerate().collect();
    let ladder_scale = if team_ratings.len() > 2 { 2.0 } else { 1.0 };

    indexed
        .iter()
        .zip(ladder_pairs(&indexed))
        .map(|(&(i, i_rating), adjacent)| {
            let (omega, delta) = adjacent
                .into_iter()
                .fold((0.0, 0.0), |(omega, delta), (q, q_rating)| {
                    let ciq = ladder_scale * (i_rating.sigma_sq + q_rating.sigma_sq + constants.two_beta_sq).sqrt();
                    let (d_omega, d_delta) = compare(&ctx, (i, i_rating), (q, q_rating), ciq);

                    (omega + d_omega, delta + d_delta)
                });

            trace!(team = i, omega, delta, "Partial pairing correction");
            apply_correction(i_rating, omega, delta, constants.epsilon)
        })
        .collect()
}
