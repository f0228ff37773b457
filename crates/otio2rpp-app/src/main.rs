//! otio2rpp - OpenTimelineIO to REAPER project converter
//!
//! Entry point: reads an `.otio` timeline and writes its audio tracks as an
//! `.rpp` project.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Convert an OpenTimelineIO timeline into a REAPER project.
#[derive(Debug, Parser)]
#[command(name = "otio2rpp", version, about)]
struct Cli {
    /// Timeline to read (.otio)
    input: PathBuf,
    /// Project to write (.rpp), replaced if it exists
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let input = expand_home(&cli.input);
    let output = expand_home(&cli.output);
    info!(input = %input.display(), output = %output.display(), "Converting");

    otio2rpp_rpp::convert_file(&input, &output)
        .with_context(|| format!("Failed to convert {}", input.display()))?;
    Ok(())
}

/// Replace a leading `~` with the user's home directory.
fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
