use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod lexicon;
mod suggest;

#[derive(Debug, Parser)]
#[command(name = "placescout-cli")]
#[command(about = "Placescout command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rank a candidate batch from a JSON file against a query.
    Suggest {
        /// The user query to score candidates against.
        #[arg(long)]
        query: String,
        /// JSON batch file with candidates and optional summaries.
        #[arg(long)]
        input: PathBuf,
        /// Override the configured return limit.
        #[arg(long)]
        limit: Option<usize>,
        /// Print suggestions as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Inspect lexicon configuration.
    Lexicon {
        #[command(subcommand)]
        command: LexiconCommands,
    },
}

#[derive(Debug, Subcommand)]
enum LexiconCommands {
    /// Load and validate a lexicon file.
    Check {
        /// Lexicon file to check; defaults to the configured path.
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = placescout_core::load_app_config_from_env()?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Suggest {
            query,
            input,
            limit,
            json,
        } => suggest::run_suggest(&config, &query, &input, limit, json).await,
        Commands::Lexicon {
            command: LexiconCommands::Check { path },
        } => lexicon::run_lexicon_check(&config, path.as_deref()),
    }
}
