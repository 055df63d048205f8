use std::{collections::HashMap, sync::Mutex};

use approx::assert_abs_diff_eq;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::model::{
    constants::{MU, SIGMA},
    structures::{
        rating::{Rating, Team},
        synergy::Synergy
    }
};

pub fn default_rating() -> Rating {
    Rating::new(MU, SIGMA)
}

/// A game of default ratings, one team per entry of `team_sizes`.
pub fn generate_game(team_sizes: &[usize]) -> Vec<Team> {
    team_sizes.iter().map(|&size| vec![default_rating(); size]).collect()
}

/// A reproducible game with ratings scattered around the defaults.
pub fn generate_random_game(seed: u64, team_sizes: &[usize]) -> Vec<Team> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    team_sizes
        .iter()
        .map(|&size| {
            (0..size)
                .map(|_| Rating::new(rng.random_range(5.0..=45.0), rng.random_range(1.0..=SIGMA)))
                .collect()
        })
        .collect()
}

pub fn assert_game_eq(actual: &[Team], expected: &[Team]) {
    assert_eq!(actual.len(), expected.len(), "Team count differs");

    for (actual_team, expected_team) in actual.iter().zip(expected) {
        assert_eq!(actual_team.len(), expected_team.len(), "Team size differs");

        for (actual, expected) in actual_team.iter().zip(expected_team) {
            assert_abs_diff_eq!(actual.mu, expected.mu, epsilon = 1e-9);
            assert_abs_diff_eq!(actual.sigma, expected.sigma, epsilon = 1e-9);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SynergyCall {
    Read(usize),
    Init(usize),
    Write(usize, Rating)
}

/// In-memory synergy store keyed by team size, recording every call.
///
/// `seed` is handed out by `init` for team sizes listed in `init_sizes`.
pub struct RecordingSynergy {
    pub seed: Rating,
    pub init_sizes: Vec<usize>,
    pub stored: Mutex<HashMap<usize, Rating>>,
    pub calls: Mutex<Vec<SynergyCall>>
}

impl RecordingSynergy {
    pub fn new(seed: Rating, init_sizes: &[usize]) -> RecordingSynergy {
        RecordingSynergy {
            seed,
            init_sizes: init_sizes.to_vec(),
            stored: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new())
        }
    }

    pub fn calls(&self) -> Vec<SynergyCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn stored(&self, team_size: usize) -> Option<Rating> {
        self.stored.lock().unwrap().get(&team_size).copied()
    }
}

impl Synergy for RecordingSynergy {
    fn read(&self, team: &[Rating]) -> Option<Rating> {
        self.calls.lock().unwrap().push(SynergyCall::Read(team.len()));
        self.stored(team.len())
    }

    fn init(&self, team: &[Rating]) -> Option<Rating> {
        self.calls.lock().unwrap().push(SynergyCall::Init(team.len()));
        self.init_sizes.contains(&team.len()).then_some(self.seed)
    }

    fn write(&self, team: &[Rating], synergy: Rating) {
        self.calls.lock().unwrap().push(SynergyCall::Write(team.len(), synergy));
        self.stored.lock().unwrap().insert(team.len(), synergy);
    }
}
