//! Treasury CLI - offline catalog generation for the Puritan Treasury reader

mod commands;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use treasury_core::SourceFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate jobs argument (must be at least 1)
fn parse_jobs(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("jobs must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

/// Parse a source format name or its author alias
fn parse_format(s: &str) -> Result<SourceFormat, String> {
    s.parse().map_err(|_| {
        format!(
            "'{}' is not a source format (devotional, exposition, catechetical)",
            s
        )
    })
}

#[derive(Parser)]
#[command(name = "treasury")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a source text into chapters
    Parse {
        /// Input text file
        input: String,

        /// Source format (devotional, exposition, catechetical)
        #[arg(short, long, value_parser = parse_format)]
        format: SourceFormat,

        /// Output chapters as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a catalog from a manifest
    Build {
        /// Manifest file listing books, sources and plans
        manifest: String,

        /// Output catalog file
        #[arg(short, long)]
        output: String,

        /// Number of parallel jobs (must be at least 1)
        #[arg(short, long, default_value = "4", value_parser = parse_jobs)]
        jobs: usize,

        /// Treat unreadable books as errors
        #[arg(long)]
        strict: bool,
    },

    /// Display information about a catalog
    Info {
        /// Catalog file
        catalog: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a catalog file
    Validate {
        /// Catalog file
        catalog: String,

        /// Treat unreadable books as errors
        #[arg(long)]
        strict: bool,
    },

    /// Extract quotable sentences from a text file
    Quotes {
        /// Input text file
        input: String,

        /// Minimum quote length in characters
        #[arg(long, default_value_t = treasury_core::text::DEFAULT_MIN_LEN)]
        min: usize,

        /// Maximum quote length in characters
        #[arg(long, default_value_t = treasury_core::text::DEFAULT_MAX_LEN)]
        max: usize,
    },

    /// Show the quote of the day
    Daily {
        /// Catalog file
        catalog: String,

        /// Date to pick the quote for (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Save the quote into the user-data store at this directory
        #[arg(long)]
        save: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("treasury_cli=debug,treasury_core=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "treasury_cli=info".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Parse {
            input,
            format,
            json,
        } => commands::parse(&input, format, json),

        Commands::Build {
            manifest,
            output,
            jobs,
            strict,
        } => commands::build(&manifest, &output, jobs, strict),

        Commands::Info { catalog, json } => commands::info(&catalog, json),

        Commands::Validate { catalog, strict } => commands::validate(&catalog, strict),

        Commands::Quotes { input, min, max } => commands::quotes(&input, min, max),

        Commands::Daily {
            catalog,
            date,
            save,
        } => commands::daily(&catalog, date, save.as_deref()).await,
    }
}
