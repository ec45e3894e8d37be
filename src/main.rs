//! taglog - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use taglog::exec::{SystemGit, check_git_installed};
use taglog::notes::{changes_introduced_by_tag, collect_tag_changes};

/// List the commit subjects introduced by a release tag.
#[derive(Parser, Debug)]
#[command(name = "taglog")]
#[command(about = "List the commit subjects introduced by a release tag")]
#[command(version)]
struct Cli {
    /// Release tag to inspect (e.g. v2.0)
    tag: String,

    /// Run as if started in this repository directory
    #[arg(short = 'C', long = "repo", value_name = "DIR")]
    repo: Option<PathBuf>,

    /// Emit JSON ({tag, previous_tag, subjects}) instead of plain text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    check_git_installed()
        .await
        .context("git is required on PATH")?;

    let git = match &cli.repo {
        Some(dir) => SystemGit::in_dir(dir),
        None => SystemGit::new(),
    };

    if cli.json {
        let changes = collect_tag_changes(&git, &cli.tag)
            .await
            .with_context(|| format!("Failed to extract changes for tag '{}'", cli.tag))?;
        println!("{}", serde_json::to_string_pretty(&changes)?);
    } else {
        let subjects = changes_introduced_by_tag(&git, &cli.tag)
            .await
            .with_context(|| format!("Failed to extract changes for tag '{}'", cli.tag))?;
        if subjects.is_empty() {
            eprintln!("No changes found for {}", cli.tag);
        } else {
            println!("{}", subjects);
        }
    }

    Ok(())
}
