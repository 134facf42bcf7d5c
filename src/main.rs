use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use transcript_fetch::cli::{Cli, USAGE_MESSAGE};
use transcript_fetch::transcript::YoutubeTranscriptProvider;
use transcript_fetch::{output, Config, TranscriptPipeline};

fn create_spinner(quiet: bool, msg: &str) -> Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }

    let progress = ProgressBar::new_spinner();
    progress.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    progress.set_message(msg.to_string());
    progress.enable_steady_tick(Duration::from_millis(80));
    Ok(progress)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the transcript
    let default_filter = if cli.verbose {
        "transcript_fetch=debug"
    } else {
        "transcript_fetch=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(url_or_id) = cli.input.as_deref() else {
        println!("{}", USAGE_MESSAGE);
        std::process::exit(1);
    };

    let config = Config::load(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.output.format);

    let provider = YoutubeTranscriptProvider::new(config.provider.preserve_formatting)?;
    let pipeline = TranscriptPipeline::new(Box::new(provider));

    tracing::info!("Starting transcript fetch for: {}", url_or_id);

    let progress = create_spinner(cli.quiet, "Fetching transcript...")?;
    let fetched = pipeline.fetch(url_or_id).await;
    progress.finish_and_clear();
    let transcript = fetched?;

    match cli.output {
        Some(path) => {
            output::save_to_file(&transcript, &path, &format)?;
            eprintln!("Transcript saved to: {}", path.display());
        }
        None => {
            output::print_to_console(&transcript, &format)?;
        }
    }

    Ok(())
}
