pub mod auth;
pub mod output;
pub mod units;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "aseko",
    version,
    about = "Aseko Pool Live CLI - monitor pool dosing units"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable table instead of JSON
    #[arg(short = 't', long = "table", global = true)]
    pub table: bool,

    /// Verbose output (show HTTP requests)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Authenticate with Aseko Pool Live
    Login,

    /// Logout and clear stored authentication tokens
    Logout,

    /// Show authentication status
    Status,

    /// Pool units
    #[command(subcommand)]
    Units(units::UnitsCommand),
}
