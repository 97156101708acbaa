mod config;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use calculator::{Accumulator, Operation};
use clap::{Parser, Subcommand};
use movie_query::{
    LookupQuery, MediaType, MovieQueryClient, OmdbClient, PlotLength, SearchQuery,
};

use crate::config::{AppConfig, CliOverrides};

/// Running-total calculator and movie database client
#[derive(Parser)]
#[command(name = "movie-cli")]
#[command(version)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// API key for the movie service (overrides config and environment)
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply accumulator steps and print each running total,
    /// e.g. `calc add 5 mul 3 sub 2`
    Calc {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        tokens: Vec<String>,
    },
    /// Search titles by free text
    Search {
        title: String,
        /// movie, series or episode
        #[arg(long = "type")]
        media_type: Option<MediaType>,
        #[arg(long)]
        year: Option<u16>,
        #[arg(long)]
        page: Option<u16>,
    },
    /// Look up one title by identifier, e.g. tt0076759
    Find {
        id: String,
        /// short or full
        #[arg(long)]
        plot: Option<PlotLength>,
    },
    /// Validate configuration and print it (secrets redacted)
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(CliOverrides {
        api_key: cli.api_key,
        verbose: cli.verbose,
    });
    logging::init(&config.logging);

    match cli.command {
        Commands::Calc { tokens } => run_calc(&tokens),
        Commands::Search {
            title,
            media_type,
            year,
            page,
        } => {
            let mut query = SearchQuery::new(title);
            query.media_type = media_type;
            query.year = year;
            query.page = page;
            let client = OmdbClient::from_config(&config.movie_query)?;
            let results = client.search_with(&query).await?;
            print_json(&results)
        }
        Commands::Find { id, plot } => {
            let query = LookupQuery { id, plot };
            let client = OmdbClient::from_config(&config.movie_query)?;
            let record = client.find_with(&query).await?;
            print_json(&record)
        }
        Commands::Check => {
            OmdbClient::from_config(&config.movie_query)?;
            tracing::info!("configuration is valid");
            print_json(&config)
        }
    }
}

fn run_calc(tokens: &[String]) -> Result<()> {
    let ops = Operation::parse_sequence(tokens).context("invalid calculation")?;
    let mut acc = Accumulator::new();
    for op in ops {
        let total = acc
            .apply(op)
            .with_context(|| format!("cannot apply '{op}' to {}", acc.total()))?;
        println!("{total}");
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
