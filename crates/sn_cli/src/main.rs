use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use sn_scrapers::logging::init_logging;
use sn_scrapers::{build_manager, handle_command, ScraperManager, SummarizeArgs};
use tracing::info;

const PROMPT: &str = "Please enter URL you want the summary of: ";

#[derive(Parser, Debug)]
#[command(author, version, about = "Summarize the articles on a security news listing page", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    args: SummarizeArgs,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Asks for the listing URL on `output` and reads one line from `input`.
fn prompt_for_url(input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn setup(args: &SummarizeArgs) -> Result<ScraperManager> {
    let manager = build_manager(args)
        .with_context(|| format!("Failed to set up the {} summarizer", args.model.as_str()))?;
    info!("🧠 Summarizer initialized (using {})", manager.orchestrator().model_name());
    Ok(manager)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let manager = setup(&cli.args)?;

    let url = match cli.args.url.as_deref() {
        Some(url) => url.trim().to_string(),
        None => prompt_for_url(&mut io::stdin().lock(), &mut io::stdout())
            .context("Failed to read the listing URL")?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    handle_command(&cli.args, &manager, &url, &mut out)
        .await
        .context("Failed to write the report")
}
