//! eray CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "eray", version, about = "Somali-English vocabulary trainer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive practice quiz
    Practice {
        /// Path to a vocabulary .toml file
        #[arg(long)]
        words: PathBuf,

        /// Number of questions to ask
        #[arg(long, default_value = "10")]
        count: usize,

        /// Question mode: so-to-en, en-to-so, audio, mixed
        #[arg(long, default_value = "mixed")]
        mode: String,

        /// Bias questions toward words missed in a previous session
        #[arg(long, requires = "history")]
        adaptive: bool,

        /// Saved session JSON from a previous run (for --adaptive)
        #[arg(long)]
        history: Option<PathBuf>,

        /// Seed for the question shuffler (reproducible quizzes)
        #[arg(long)]
        seed: Option<u64>,

        /// Directory to save the finished session to
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Analyze a saved quiz session
    Analyze {
        /// Saved session JSON
        #[arg(long)]
        session: PathBuf,

        /// Vocabulary .toml file the session was drawn from
        #[arg(long)]
        words: PathBuf,
    },

    /// Validate vocabulary TOML files
    Validate {
        /// Path to a vocabulary file or directory
        #[arg(long)]
        words: PathBuf,
    },

    /// Create a starter vocabulary file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("eray=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Practice {
            words,
            count,
            mode,
            adaptive,
            history,
            seed,
            output,
        } => commands::practice::execute(words, count, mode, adaptive, history, seed, output),
        Commands::Analyze { session, words } => commands::analyze::execute(session, words),
        Commands::Validate { words } => commands::validate::execute(words),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
