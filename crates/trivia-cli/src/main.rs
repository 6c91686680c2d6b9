//! trivia CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "trivia", version, about = "Trivia question bank and quiz runner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List questions, one page at a time
    List {
        /// Page number (1-based)
        #[arg(long, default_value = "1")]
        page: usize,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List all categories
    Categories {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Search question text for a term
    Search {
        /// The term to look for (case-insensitive substring)
        term: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Add a question to the deck
    Add {
        /// The question text
        #[arg(long)]
        question: String,

        /// The accepted answer
        #[arg(long)]
        answer: String,

        /// Category id
        #[arg(long)]
        category: u64,

        /// Difficulty rating, 1-5
        #[arg(long)]
        difficulty: u8,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Delete a question by id
    Delete {
        /// Id of the question to delete
        id: u64,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Play a quiz session
    Play {
        /// Restrict questions to one category id
        #[arg(long)]
        category: Option<u64>,

        /// Questions per session (defaults to the configured quiz length)
        #[arg(long)]
        length: Option<usize>,

        /// Seed the random draw for a reproducible session
        #[arg(long)]
        seed: Option<u64>,

        /// Save a JSON session report to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and seeded data file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("trivia=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { page, config } => commands::list::execute(page, config).await,
        Commands::Categories { config } => commands::categories::execute(config).await,
        Commands::Search { term, config } => commands::search::execute(term, config).await,
        Commands::Add {
            question,
            answer,
            category,
            difficulty,
            config,
        } => commands::add::execute(question, answer, category, difficulty, config).await,
        Commands::Delete { id, config } => commands::delete::execute(id, config).await,
        Commands::Play {
            category,
            length,
            seed,
            report,
            config,
        } => commands::play::execute(category, length, seed, report, config).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
