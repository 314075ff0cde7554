//! CLI module for tldw.

pub mod commands;
mod output;

pub use output::Output;

use crate::config::Provider;
use clap::Parser;

/// tldw - too long; didn't watch
///
/// Summarize a YouTube video from its captions, then ask follow-up questions
/// about it interactively.
#[derive(Parser, Debug)]
#[command(name = "tldw")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// YouTube URL or bare 11-character video ID
    pub input: Option<String>,

    /// LLM provider to use
    #[arg(short, long, value_enum, default_value_t = Provider::Venice)]
    pub provider: Provider,

    /// Fetch, print, and save the raw transcript instead of summarizing
    #[arg(long)]
    pub test_transcript: bool,

    /// File to write the transcript to (with --test-transcript)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Custom instruction to use in place of the default summary prompt
    #[arg(long)]
    pub prompt: Option<String>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
