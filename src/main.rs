//! changescribe - CLI entry point.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use changescribe::changelog::writer::generate_summary;
use changescribe::version::resolve_version;
use changescribe::{ChangelogGenerator, Config, GitRepository, OpenAiClient, Pipeline, RunOutcome};

/// Draft a changelog entry from the commits since the last tag.
#[derive(Parser, Debug)]
#[command(name = "changescribe")]
#[command(about = "Generate a changelog entry from git history using an LLM")]
#[command(version)]
struct Cli {
    /// Version label for the new entry (prompted for when omitted)
    #[arg(value_name = "VERSION")]
    release: Option<String>,

    /// Path to changelog file
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Chat model to request (overrides CHANGESCRIBE_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Dry run - print the generated text without writing
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let mut config = Config::from_env();
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(output) = cli.output {
        config.changelog_path = output;
    }

    let repo = GitRepository::discover(Path::new("."))
        .context("Not a git repository. Run changescribe from within a git repository.")?;

    let generator = ChangelogGenerator::new(OpenAiClient::new(&config), config.model.clone());
    let pipeline = Pipeline::new(repo, generator, config.changelog_path).dry_run(cli.dry_run);

    let release = cli.release;
    let outcome = pipeline
        .run(|suggestion| resolve_version(release, suggestion))
        .await
        .context("Failed to generate changelog")?;

    match outcome {
        RunOutcome::NoCommits { .. } => {
            println!("No new commits found.");
        }
        RunOutcome::DryRun { .. } => {
            println!("\nDry run - {} not modified.", pipeline.changelog_path().display());
        }
        RunOutcome::Written {
            commit_count, entry, ..
        } => {
            let summary = generate_summary(pipeline.changelog_path(), &entry, commit_count);
            println!("✓ {}", summary);
        }
    }

    Ok(())
}
