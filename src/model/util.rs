use crate::model::structures::{
    options::Options,
    rating::{Rating, Team},
    team_rating::TeamRating
};

/// Collapses a rank array into rank classes.
///
/// Without ranks, teams are assumed to be in finishing order and each gets
/// its own class `0..n`. With ranks, a single pass compares each entry with
/// its predecessor: equal values share the current class, and the class only
/// advances (to the entry's index) on a strict increase.
///
/// Ranks must already be sorted ascending, as [`crate::model::rate::rate`]
/// leaves them. Unsorted input is not reordered: `[2, 1, 4, 3]` gives
/// `[0, 0, 2, 2]`, pairing teams of different ranks as ties.
pub fn rankings(teams: &[Team], rank: Option<&[f64]>) -> Vec<usize> {
    let rank = match rank {
        Some(rank) => rank,
        None => return (0..teams.len()).collect()
    };

    let mut classes = Vec::with_capacity(teams.len());
    let mut class = 0;
    for j in 0..teams.len() {
        if j > 0 && rank[j - 1] < rank[j] {
            class = j;
        }
        classes.push(class);
    }

    classes
}

/// Aggregates each team into `(sum of mu, sum of sigma^2, team, rank class)`.
pub fn team_rating<'a>(game: &'a [Team], rank: Option<&[f64]>) -> Vec<TeamRating<'a>> {
    let classes = rankings(game, rank);

    game.iter()
        .zip(classes)
        .map(|(team, rank)| TeamRating {
            mu: team.iter().map(|p| p.mu).sum(),
            sigma_sq: team.iter().map(|p| p.sigma * p.sigma).sum(),
            team,
            rank
        })
        .collect()
}

/// For each element, its previous and next neighbours (where they exist).
pub fn ladder_pairs<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    (0..items.len())
        .map(|i| {
            let left = i.checked_sub(1).and_then(|l| items.get(l));
            let right = items.get(i + 1);

            left.into_iter().chain(right).cloned().collect()
        })
        .collect()
}

/// Default variance-shrink scaling: the team's own standard deviation over `ciq`.
pub fn default_gamma(c: f64, _k: usize, _mu: f64, sigma_sq: f64, _team: &[Rating], _rank: usize) -> f64 {
    sigma_sq.sqrt() / c
}

/// Applies the caller's gamma if one was supplied, otherwise [`default_gamma`].
pub fn gamma(options: &Options, c: f64, k: usize, team_rating: &TeamRating) -> f64 {
    let TeamRating {
        mu,
        sigma_sq,
        team,
        rank
    } = *team_rating;

    match &options.gamma {
        Some(gamma) => gamma(c, k, mu, sigma_sq, team, rank),
        None => default_gamma(c, k, mu, sigma_sq, team, rank)
    }
}
