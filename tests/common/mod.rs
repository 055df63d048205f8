use std::sync::Once;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wenglin::{Rating, Team};

static INIT: Once = Once::new();

/// Initialize test environment with RUST_LOG=WARN
pub fn init_test_env() {
    INIT.call_once(|| {
        std::env::set_var("RUST_LOG", "warn");
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Reproducible random games: 1..=6 teams of 1..=4 players around the default rating.
pub fn random_games(seed: u64, count: usize) -> Vec<(Vec<Team>, Vec<f64>)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let teams = rng.random_range(1..=6);
            let game: Vec<Team> = (0..teams)
                .map(|_| {
                    (0..rng.random_range(1..=4))
                        .map(|_| Rating::new(rng.random_range(0.0..=50.0), rng.random_range(0.5..=25.0 / 3.0)))
                        .collect()
                })
                .collect();
            // Small rank range so ties show up regularly
            let rank = (0..teams).map(|_| rng.random_range(1..=3) as f64).collect();

            (game, rank)
        })
        .collect()
}
