use itertools::Itertools;
use tracing::debug;

use crate::model::{
    constants::Constants,
    error::RateError,
    structures::{
        model_kind::ModelKind,
        options::Options,
        rating::{Rating, Team}
    }
};

/// Constructs a fresh rating from the resolved defaults (`mu`, `sigma`).
pub fn rating(options: &Options) -> Rating {
    let constants = Constants::resolve(options);
    Rating::new(constants.mu, constants.sigma)
}

/// # Rating a game
///
/// Computes posterior ratings for every player of a multi-team game. The
/// output has exactly the shape of `game`.
///
/// Steps:
/// 1. Validate the shape of the game against `rank`, `score` and `weight`.
/// 2. Fold each team's synergy rating (if a synergy store is configured) into
///     the team as an extra pseudo-player.
/// 3. Re-inject `tau` into every sigma.
/// 4. Sort teams into finishing order (`rank`, else descending `score`, else
///     index order) and run the selected model, defaulting to full pairing.
/// 5. Restore the caller's order, clamp sigma growth when `limit_sigma` is set,
///     and write synergy ratings back.
pub fn rate(game: &[Team], options: &Options) -> Result<Vec<Team>, RateError> {
    validate(game, options)?;
    let constants = Constants::resolve(options);

    let synergies: Vec<Option<Rating>> = match &options.synergy {
        Some(store) => game
            .iter()
            .map(|team| store.read(team).or_else(|| store.init(team)))
            .collect(),
        None => vec![None; game.len()]
    };

    let priors: Vec<Team> = game
        .iter()
        .zip(&synergies)
        .map(|(team, synergy)| team.iter().copied().chain(*synergy).collect())
        .collect();

    let processed: Vec<Team> = priors
        .iter()
        .map(|team| team.iter().map(|player| inject_tau(player, constants.tau)).collect())
        .collect();

    // Lower is better. Scores are negated so the highest score finishes first.
    let finishing_key: Option<Vec<f64>> = options
        .rank
        .clone()
        .or_else(|| options.score.as_ref().map(|score| score.iter().map(|s| -s).collect()));

    let order: Vec<usize> = match &finishing_key {
        Some(key) => (0..game.len()).sorted_by(|&a, &b| key[a].total_cmp(&key[b])).collect(),
        None => (0..game.len()).collect()
    };

    let ordered_game: Vec<Team> = order.iter().map(|&i| processed[i].clone()).collect();
    let model_options = Options {
        rank: finishing_key.map(|key| order.iter().map(|&i| key[i]).collect()),
        score: options.score.as_ref().map(|score| order.iter().map(|&i| score[i]).collect()),
        weight: options
            .weight
            .as_ref()
            .map(|weight| ordered_weights(weight, &order, &synergies)),
        ..options.clone()
    };

    let model = options.model.clone().unwrap_or_else(|| ModelKind::Full.model());

    debug!(
        teams = game.len(),
        players = game.iter().map(Vec::len).sum::<usize>(),
        synergy = synergies.iter().any(Option::is_some),
        "Rating game"
    );

    let rated = model(&ordered_game, &model_options, &constants);
    check_model_output(&rated, &ordered_game)?;

    let mut restored: Vec<Team> = vec![Vec::new(); game.len()];
    for (team, &i) in rated.into_iter().zip(&order) {
        restored[i] = team;
    }

    let guarded = restored.into_iter().zip(&priors).map(|(team, prior)| {
        if !constants.limit_sigma {
            return team;
        }

        team.into_iter()
            .zip(prior)
            .map(|(posterior, prior)| Rating {
                sigma: posterior.sigma.min(prior.sigma),
                ..posterior
            })
            .collect::<Team>()
    });

    Ok(guarded
        .zip(game)
        .zip(&synergies)
        .map(|((mut team, original), synergy)| {
            if let (Some(store), Some(_)) = (&options.synergy, synergy) {
                if let Some(updated) = team.pop() {
                    store.write(original, updated);
                }
            }
            team
        })
        .collect())
}

/// Rates a game of exactly two teams of exactly two players. Draws are rejected.
pub fn rate_2v2(team_a: &[Rating], team_b: &[Rating], options: &Options) -> Result<(Team, Team), RateError> {
    for (team, players) in [team_a.len(), team_b.len()].into_iter().enumerate() {
        if players != 2 {
            return Err(RateError::TeamSize { team, players });
        }
    }

    if let Some([a, b]) = options.rank.as_deref() {
        if a == b {
            return Err(RateError::Draw { field: "rank" });
        }
    }

    if let Some([a, b]) = options.score.as_deref() {
        if a == b {
            return Err(RateError::Draw { field: "score" });
        }
    }

    let [updated_a, updated_b]: [Team; 2] = rate(&[team_a.to_vec(), team_b.to_vec()], options)?
        .try_into()
        .map_err(|teams: Vec<Team>| RateError::ModelOutput {
            expected: 2,
            found: teams.len()
        })?;

    Ok((updated_a, updated_b))
}

fn validate(game: &[Team], options: &Options) -> Result<(), RateError> {
    if game.is_empty() {
        return Err(RateError::EmptyGame);
    }

    if let Some(team) = game.iter().position(Vec::is_empty) {
        return Err(RateError::EmptyTeam { team });
    }

    for (field, len) in [
        ("rank", options.rank.as_ref().map(Vec::len)),
        ("score", options.score.as_ref().map(Vec::len)),
        ("weight", options.weight.as_ref().map(Vec::len))
    ] {
        match len {
            Some(found) if found != game.len() => {
                return Err(RateError::LengthMismatch {
                    field,
                    expected: game.len(),
                    found
                })
            }
            _ => {}
        }
    }

    if let Some(weight) = &options.weight {
        for (team, (players, weights)) in game.iter().zip(weight).enumerate() {
            if players.len() != weights.len() {
                return Err(RateError::WeightShape {
                    team,
                    expected: players.len(),
                    found: weights.len()
                });
            }
        }
    }

    Ok(())
}

fn check_model_output(rated: &[Team], game: &[Team]) -> Result<(), RateError> {
    if rated.len() != game.len() {
        return Err(RateError::ModelOutput {
            expected: game.len(),
            found: rated.len()
        });
    }

    for (team, (output, input)) in rated.iter().zip(game).enumerate() {
        if output.len() != input.len() {
            return Err(RateError::ModelTeamOutput {
                team,
                expected: input.len(),
                found: output.len()
            });
        }
    }

    Ok(())
}

fn inject_tau(player: &Rating, tau: f64) -> Rating {
    if tau <= 0.0 {
        return *player;
    }

    Rating {
        sigma: (player.sigma * player.sigma + tau * tau).sqrt(),
        ..*player
    }
}

/// Weights in finishing order. Synergy pseudo-players take full weight.
fn ordered_weights(weight: &[Vec<f64>], order: &[usize], synergies: &[Option<Rating>]) -> Vec<Vec<f64>> {
    order
        .iter()
        .map(|&i| {
            let mut team = weight[i].clone();
            if synergies[i].is_some() {
                team.push(1.0);
            }
            team
        })
        .collect()
}
