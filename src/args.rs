use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wenglin::ModelKind;

#[derive(Parser, Clone)]
#[command(
    display_name = "Weng-Lin",
    long_about = "Rates multi-team games with the Weng-Lin Thurstone-Mosteller models. \
    Input is a JSON game object {\"teams\": [...], \"options\": {...}} or an array of them."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Input file. Reads stdin when omitted or `-`
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Comparison model used when rating
    #[arg(short, long, global = true, default_value_t = ModelKind::Full)]
    pub model: ModelKind,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        global = true,
        env = "RUST_LOG",
        default_value = "info",
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Prints the updated teams
    Rate,
    /// Prints win probabilities per team and the draw probability
    Predict,
    /// Prints the ordinal of every player
    Ordinal
}
