//! `laf` — Layered Authorship Framework tooling.
//!
//! Two subcommands over the same core domain (laf-core): `add` walks a
//! project tree inserting attribution headers, `check` gates a commit on
//! the staged files carrying them.

use clap::{Parser, Subcommand};

use laf_cli::commands;

/// Layered Authorship Framework — attribution tagging and commit compliance
#[derive(Parser)]
#[command(
    name = "laf",
    version,
    about = "Layered Authorship Framework — attribution tagging and commit compliance"
)]
struct Cli {
    /// Enable verbose (debug-level) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recursively add attribution headers to files under a path
    Add {
        /// Root path to process
        #[arg(default_value = ".")]
        path: String,

        /// Path to a JSON configuration override document
        #[arg(long, env = "LAF_CONFIG")]
        config: Option<String>,

        /// Primary author stamped into headers (overrides the config document)
        #[arg(long, env = "LAF_AUTHOR")]
        author: Option<String>,

        /// Classify and render, but write nothing
        #[arg(long)]
        dry_run: bool,
    },

    /// Pre-commit check: fail when staged files lack attribution
    Check {
        /// Path to a JSON configuration override document
        #[arg(long, env = "LAF_CONFIG")]
        config: Option<String>,

        /// Primary author used by the attribution predicate and remediation
        #[arg(long, env = "LAF_AUTHOR")]
        author: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                if cli.verbose {
                    "laf_core=debug,laf_cli=debug".into()
                } else {
                    "laf_core=warn,laf_cli=info".into()
                }
            }),
        )
        .init();

    let result = match cli.command {
        Commands::Add {
            path,
            config,
            author,
            dry_run,
        } => commands::add::run(&path, config.as_deref(), author.as_deref(), dry_run),
        Commands::Check { config, author } => {
            commands::check::run(config.as_deref(), author.as_deref())
        }
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
