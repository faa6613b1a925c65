use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use wikiskim_common::io::{LineSource, StdinLineSource};
use wikiskim_common::observability::{init_logging, LogConfig};
use wikiskim_config::{WikiskimConfig, WikiskimConfigLoader};
use wikiskim_wiki::{SelectionFlow, WikiApi};

const DEFAULT_CONFIG_FILE: &str = "wikiskim.yaml";

/// Search Wikipedia and print a short article summary.
#[derive(Debug, Parser)]
#[command(name = "wikiskim", version, about)]
struct Cli {
    /// Topic to search for; multiple words are joined with underscores.
    /// Without this flag the tool prompts interactively.
    #[arg(short = 't', long = "topic", num_args = 1.., value_name = "WORD")]
    topic: Option<Vec<String>>,

    /// Config file to load (defaults to ./wikiskim.yaml when present).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) Load config (env wins)
    let cfg = load_config(cli.config.as_deref())?;

    init_logging(LogConfig {
        log_dir: cfg.log.dir.clone(),
        emit_stderr: cfg.log.stderr,
        default_filter: cfg.log.filter.clone(),
        ..LogConfig::default()
    })?;

    let mut lines = StdinLineSource;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let topic = match cli.topic {
        Some(words) => words.join("_"),
        None => prompt_topic(&mut lines, &mut out)?,
    };
    let topic = topic.trim().to_string();
    anyhow::ensure!(!topic.is_empty(), "you must enter a topic to search for");

    writeln!(out)?;

    let api = WikiApi::new(&cfg.api.endpoint)?
        .with_timeout(Duration::from_secs(cfg.api.timeout_secs));
    let flow = SelectionFlow::new(api);

    tracing::info!(topic, endpoint = %cfg.api.endpoint, "wikiskim.start");
    flow.run(&topic, &mut lines, &mut out).await?;
    writeln!(out)?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<WikiskimConfig> {
    let mut loader = WikiskimConfigLoader::new();
    match path {
        Some(p) => loader = loader.with_file(p),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            loader = loader.with_file(DEFAULT_CONFIG_FILE);
        }
        None => {}
    }
    Ok(loader.load()?)
}

fn prompt_topic(lines: &mut dyn LineSource, out: &mut dyn Write) -> Result<String> {
    write!(out, "\nWelcome to the Wikipedia search tool!\n\n")?;
    write!(out, "Enter the topic you want to search for: ")?;
    out.flush()?;
    Ok(lines.next_line()?.unwrap_or_default())
}
