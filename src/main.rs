use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use bikeshare_explorer::config::{CityCatalog, ExplorerConfig};
use bikeshare_explorer::ingestion::{FileObserver, LoadObserver, LoadOptions, LogObserver};
use bikeshare_explorer::prompt::Prompter;
use bikeshare_explorer::session::Session;

#[derive(Parser, Debug)]
#[command(
    name = "bikeshare",
    version,
    about = "Explore US bike-share trip data interactively"
)]
struct Cli {
    /// Directory holding the city CSV files
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// JSON file mapping city names to dataset files
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Append dataset load events to this file
    #[arg(long)]
    event_log: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => CityCatalog::from_json_path(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?,
        None => CityCatalog::default(),
    };
    let config = ExplorerConfig {
        data_dir: cli.data_dir,
        catalog,
        ..Default::default()
    };

    let mut observers: Vec<Arc<dyn LoadObserver>> = vec![Arc::new(LogObserver)];
    if let Some(path) = &cli.event_log {
        let file = FileObserver::create(path)
            .with_context(|| format!("failed to open event log {}", path.display()))?;
        observers.push(Arc::new(file));
    }
    let load_options = LoadOptions {
        observers,
        ..Default::default()
    };

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
    Session::new(config, load_options).run(&mut prompter)?;
    Ok(())
}
