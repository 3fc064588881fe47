use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

mod clock;
mod commands;
mod output;
mod quiz;
mod session;
mod slug;

use crate::commands::play::PlayArgs;
use crate::quiz::DirectorySource;

#[derive(Parser)]
#[command(name = "quiz-show", version, about = "Multiple-choice quiz presenter")]
struct Cli {
    /// Directory holding map.json and quiz/<slug>.json
    #[arg(long, global = true, env = "QUIZ_SHOW_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available quizzes
    List,

    /// Present a quiz, looping until you quit
    Play(PlayArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let data_dir = commands::resolve_data_dir(cli.data_dir);
    tracing::info!("Reading quizzes from {:?}", data_dir);
    let source = DirectorySource::new(data_dir);

    let result = match &cli.command {
        Commands::List => commands::list::list(&source).map(|listing| println!("{}", listing)),
        Commands::Play(args) => {
            let stdin = io::stdin();
            let input = stdin.lock();
            commands::play::play(&source, args, input)
        }
    };

    if let Err(e) = result {
        tracing::warn!("{:?}", e);
        eprintln!("{:#}", e);
        process::exit(1);
    }
}
