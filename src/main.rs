mod args;

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process
};

use clap::Parser;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info};
use wenglin::{ordinal, predict_draw, predict_win, rate, Options, RateError, Team};

use crate::args::{Args, Command};

#[derive(Debug, Error)]
enum CliError {
    #[error("Failed to read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("Invalid input document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Game {game} could not be rated: {source}")]
    Rate { game: usize, source: RateError }
}

#[derive(Deserialize)]
struct GameInput {
    teams: Vec<Team>,
    #[serde(default)]
    options: Options
}

/// Either a single game or a batch, mirrored in the output.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Batch(Vec<GameInput>),
    Single(GameInput)
}

#[derive(Serialize)]
struct Prediction {
    win: Vec<f64>,
    draw: f64
}

fn main() {
    dotenv::dotenv().ok();
    let args = Args::parse();
    wenglin::utils::tracing_utils::init_tracing(&args.log_level);

    if let Err(e) = run(&args) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let raw = read_input(args.input.as_ref())?;
    let (games, single) = match serde_json::from_str(&raw)? {
        Document::Batch(games) => (games, false),
        Document::Single(game) => (vec![game], true)
    };

    info!(games = games.len(), command = ?args.command, model = %args.model, "Processing input");

    let mut results = games
        .par_iter()
        .enumerate()
        .map(|(i, game)| evaluate(args, i, game))
        .collect::<Result<Vec<Value>, CliError>>()?;

    let output = if single { results.remove(0) } else { Value::Array(results) };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn evaluate(args: &Args, i: usize, game: &GameInput) -> Result<Value, CliError> {
    debug!(game = i, teams = game.teams.len(), "Evaluating game");

    let value = match args.command {
        Command::Rate => {
            let options = Options {
                model: Some(args.model.model()),
                ..game.options.clone()
            };
            let rated = rate(&game.teams, &options).map_err(|source| CliError::Rate { game: i, source })?;

            serde_json::to_value(rated)?
        }
        Command::Predict => serde_json::to_value(Prediction {
            win: predict_win(&game.teams, &game.options),
            draw: predict_draw(&game.teams, &game.options)
        })?,
        Command::Ordinal => {
            let ordinals: Vec<Vec<f64>> = game
                .teams
                .iter()
                .map(|team| team.iter().map(|player| ordinal(player, &game.options)).collect())
                .collect();

            serde_json::to_value(ordinals)?
        }
    };

    Ok(value)
}

fn read_input(path: Option<&PathBuf>) -> Result<String, CliError> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.display().to_string(),
            source
        }),
        _ => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw).map_err(|source| CliError::Read {
                path: "stdin".to_string(),
                source
            })?;
            Ok(raw)
        }
    }
}
