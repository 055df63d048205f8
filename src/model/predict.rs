use itertools::Itertools;

use crate::model::{
    constants::Constants,
    statistics::{phi_major, phi_major_inverse},
    structures::{
        options::Options,
        rating::{Rating, Team}
    },
    util::team_rating
};

/// Win probability for each team, summing to one.
///
/// Each team's probability is the sum of its pairwise win chances against
/// every other team, normalized by the number of pairs. A single team always
/// wins, an empty game has no probabilities.
pub fn predict_win(teams: &[Team], options: &Options) -> Vec<f64> {
    let n = teams.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![1.0],
        _ => {}
    }

    let constants = Constants::resolve(options);
    let team_ratings = team_rating(teams, None);
    let pairs = (n * (n - 1)) as f64 / 2.0;
    let n_beta_sq = n as f64 * constants.beta_sq;

    team_ratings
        .iter()
        .enumerate()
        .map(|(i, a)| {
            team_ratings
                .iter()
                .enumerate()
                .filter(|(q, _)| *q != i)
                .map(|(_, b)| phi_major((a.mu - b.mu) / (n_beta_sq + a.sigma_sq + b.sigma_sq).sqrt()))
                .sum::<f64>()
                / pairs
        })
        .collect()
}

/// Probability that the game ends in a draw, averaged over every ordered pair of teams.
pub fn predict_draw(teams: &[Team], options: &Options) -> f64 {
    if teams.len() < 2 {
        return 0.0;
    }

    let constants = Constants::resolve(options);
    let players = teams.iter().map(Vec::len).sum::<usize>() as f64;
    let draw_margin = players.sqrt() * constants.beta * phi_major_inverse((1.0 + 1.0 / players) / 2.0);
    let n_beta_sq = players * constants.beta_sq;

    let team_ratings = team_rating(teams, None);
    let probabilities = team_ratings
        .iter()
        .permutations(2)
        .map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            let denom = (n_beta_sq + a.sigma_sq + b.sigma_sq).sqrt();

            phi_major((draw_margin - a.mu + b.mu) / denom) - phi_major((b.mu - a.mu - draw_margin) / denom)
        })
        .collect_vec();

    probabilities.iter().sum::<f64>() / probabilities.len() as f64
}

/// Conservative display value of a rating, `alpha * ((mu - z * sigma) + target / alpha)`.
pub fn ordinal(rating: &Rating, options: &Options) -> f64 {
    let constants = Constants::resolve(options);
    constants.alpha * ((rating.mu - constants.z * rating.sigma) + constants.target / constants.alpha)
}
