//! tldw CLI entry point.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tldw::cli::{commands, Cli, Output};
use tldw::config::Settings;
use tldw::youtube;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("tldw={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // The positional argument must look like a YouTube URL or a bare video ID.
    let input = match cli.input.as_deref().filter(|i| youtube::is_video_input(i)) {
        Some(input) => input,
        None => {
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let video_id = youtube::extract_video_id(input);

    // Configuration is read from the environment once, up front.
    let settings = Settings::from_env();

    let result = if cli.test_transcript {
        commands::run_transcript(&video_id, cli.output.clone()).await
    } else {
        commands::run_summarize(&video_id, cli.provider, cli.prompt.clone(), settings).await
    };

    // Every failure prints exactly one styled diagnostic before exiting.
    if let Err(e) = result {
        Output::error(&format!("{}", e));
        std::process::exit(1);
    }

    Ok(())
}
