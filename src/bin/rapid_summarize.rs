use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rapid_summarizer::{ExtractiveSummarizer, SummarizerConfig};

#[derive(Parser, Debug)]
#[command(name = "rapid-summarize")]
#[command(about = "Extract the most central sentences of a text")]
struct Cli {
    /// Text to summarize
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,
    /// File to summarize (`-` reads stdin)
    #[arg(long)]
    file: Option<PathBuf>,
    /// Fraction of sentences to keep, in (0, 1]
    #[arg(long, default_value_t = 0.2)]
    ratio: f64,
    /// Number of sentences to keep; overrides --ratio
    #[arg(long)]
    max: Option<usize>,
    /// PageRank damping factor
    #[arg(long, default_value_t = 0.85)]
    damping: f64,
    /// Convergence tolerance
    #[arg(long, default_value_t = 1e-6)]
    tolerance: f64,
    /// Maximum power iterations
    #[arg(long, default_value_t = 100)]
    max_iterations: usize,
    /// Stopword language
    #[arg(long, default_value = "tr")]
    language: String,
    /// Print the detailed result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn read_input(cli: &Cli) -> Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    match &cli.file {
        Some(path) if path.as_os_str() == "-" => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => bail!("no text source provided; use --text or --file"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let text = read_input(&cli)?;

    let mut config = SummarizerConfig::new()
        .with_ratio(cli.ratio)
        .with_damping(cli.damping)
        .with_tolerance(cli.tolerance)
        .with_max_iterations(cli.max_iterations)
        .with_language(cli.language.clone());
    config.max_sentences = cli.max;

    let summarizer =
        ExtractiveSummarizer::with_config(config).context("invalid summarizer configuration")?;
    let result = summarizer.summarize_detailed(&text);

    tracing::info!(
        sentences = result.num_sentences,
        selected = result.sentences.len(),
        "summarized input"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("\n--- SUMMARY (extractive) ---\n");
        println!("{}", result.summary);
        println!("\n----------------------------\n");
    }

    Ok(())
}
