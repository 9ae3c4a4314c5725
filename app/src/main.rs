#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{ArgAction, Parser, Subcommand};
use gematria_core::Method;
use tracing_subscriber::EnvFilter;

mod command;
mod render;

use command::{
    CalcInput, CalcStrategy, CommandStrategy, InfoStrategy, InitStrategy, LettersStrategy,
    VersionStrategy,
};

#[derive(Parser)]
#[command(name = "gematria")]
#[command(about = "Hebrew gematria calculator", long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the gematria value of one or more names
    Calc {
        /// Hebrew names, e.g. first name and father's name
        #[arg(required = true)]
        names: Vec<String>,

        /// Calculation method: standard, ordinal, reduced or integral
        #[arg(short, long)]
        method: Option<Method>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Only print totals
        #[arg(long)]
        no_letters: bool,
    },
    /// Show the value of every letter under a method
    Letters {
        /// Calculation method: standard, ordinal, reduced or integral
        #[arg(short, long)]
        method: Option<Method>,
    },
    /// Initialize configuration
    Init,
    /// Show effective configuration
    Info,
    /// Show version
    Version,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Calc {
            names,
            method,
            json,
            no_letters,
        } => {
            CalcStrategy
                .execute(CalcInput {
                    names,
                    method,
                    json,
                    no_letters,
                })
                .await
        }
        Commands::Letters { method } => LettersStrategy.execute(method).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
