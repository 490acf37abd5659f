//! # labs-landing
//!
//! Command-line front end for the AKS Labs landing section.
//!
//! ## Usage
//!
//! ```bash
//! # Standalone page on stdout
//! labs-landing render
//!
//! # Section fragment for embedding, written to a file
//! labs-landing render --fragment --output landing.html
//!
//! # Watch the headline animate in the terminal
//! labs-landing preview
//! ```
//!
//! Without `--config`, `.labs/landing.toml` in the current directory is used
//! when present.

mod preview;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use landing_section::config::LandingConfig;
use landing_section::{render_landing, render_section};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "labs-landing")]
#[command(about = "Render and preview the AKS Labs landing section")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    /// Config file (default: .labs/landing.toml when present)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the landing page as static HTML
    Render {
        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Render only the section markup, without the page shell
        #[arg(long)]
        fragment: bool,
    },
    /// Animate the headline in the terminal until Ctrl-C
    Preview {
        /// Stop after this many milliseconds
        #[arg(long, value_name = "MS")]
        for_ms: Option<u64>,
        /// Swap whole words instead of typing them
        #[arg(long)]
        rotate: bool,
    },
    /// Print the configured word list
    Words {
        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },
}

// ============================================================================
// Commands
// ============================================================================

fn load_config(explicit: Option<&Path>) -> Result<LandingConfig> {
    match explicit {
        Some(path) => LandingConfig::load_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => {
            let root = std::env::current_dir().context("Failed to resolve current directory")?;
            Ok(LandingConfig::load(&root))
        }
    }
}

fn render(config: &LandingConfig, output: Option<&Path>, fragment: bool) -> Result<()> {
    let html = if fragment {
        render_section(config)
    } else {
        render_landing(config)
    };

    match output {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} bytes to {}", html.len(), path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn words(config: &LandingConfig, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(&config.words).context("Failed to encode words")?;
        println!("{out}");
    } else {
        for word in config.words.iter() {
            println!("{word}");
        }
    }
    Ok(())
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    debug!(words = config.words.len(), "config loaded");

    match args.command {
        Command::Render { output, fragment } => render(&config, output.as_deref(), fragment),
        Command::Preview { for_ms, rotate } => {
            preview::run(config, for_ms.map(Duration::from_millis), rotate).await
        }
        Command::Words { json } => words(&config, json),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
