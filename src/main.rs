use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use url::Url;

use filetrail::config::Config;
use filetrail::store::file::JsonFileStore;
use filetrail::tracker::RecentFilesTracker;

/// filetrail - inspect and update a workspace's recent-files list
#[derive(Parser)]
#[command(name = "filetrail")]
#[command(version)]
#[command(about = "Workspace recent-files tracker", long_about = None)]
struct Cli {
    /// Workspace name the store is scoped to
    #[arg(short, long, default_value = "default")]
    workspace: String,

    /// Override the configured capacity bound
    #[arg(short, long)]
    capacity: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the recent list, most recent first
    List,
    /// Record one or more document activations, in order
    Touch {
        /// Document URIs (or absolute filesystem paths)
        uris: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // CLI capacity overrides config capacity
    let config = Config::load();
    let capacity = cli.capacity.unwrap_or(config.capacity);

    let store_path = JsonFileStore::default_path(&cli.workspace)
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let store = JsonFileStore::open(&store_path)
        .with_context(|| format!("Failed to open store at {}", store_path.display()))?;

    let mut tracker = RecentFilesTracker::new(Box::new(store), capacity, &[]);

    match cli.command {
        Command::List => {
            for entry in tracker.ordered() {
                println!("{}\t{}", entry.file_name(), entry.uri());
            }
        }
        Command::Touch { uris } => {
            for raw in &uris {
                let uri = parse_document_uri(raw)?;
                tracker.record_activation(&uri);
            }
        }
    }

    tracker.teardown();
    Ok(())
}

/// Accepts either a full URI or a filesystem path.
fn parse_document_uri(raw: &str) -> Result<Url> {
    if let Ok(uri) = Url::parse(raw) {
        return Ok(uri);
    }

    let path = std::fs::canonicalize(raw).unwrap_or_else(|_| std::path::PathBuf::from(raw));
    Url::from_file_path(&path)
        .map_err(|_| anyhow::anyhow!("Not a valid URI or absolute path: {raw}"))
}
