//! quizapp CLI — the console quiz entry point.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use quizapp_core::QuizAppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "quizapp", version, about = "Console quiz with registration and results")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive quiz (the default)
    Play,

    /// List the built-in subjects and check them for content mistakes
    Subjects,

    /// Create a starter quizapp.toml
    Init,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = quizapp_core::load_config_from(cli.config.as_deref())?;
    init_tracing(&config);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => commands::play::execute(&config),
        Commands::Subjects => commands::subjects::execute(),
        Commands::Init => commands::init::execute(),
    }
}

/// Diagnostics go to stderr so stdout stays a clean quiz transcript.
/// `RUST_LOG` wins over the config's `log_filter`.
fn init_tracing(config: &QuizAppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
