//! tldw - too long; didn't watch
//!
//! A CLI tool that summarizes YouTube videos from their captions and answers
//! follow-up questions about them via an OpenAI-compatible chat API.
//!
//! # Overview
//!
//! tldw allows you to:
//! - Fetch the caption transcript of any YouTube video
//! - Generate a summary with a hosted LLM (Venice or Morpheus)
//! - Ask follow-up questions about the video interactively
//! - Dump the raw transcript to a file for use elsewhere
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Provider configuration, read once from the environment
//! - `youtube` - URL and video ID handling
//! - `transcript` - Caption transcript retrieval
//! - `llm` - Summarization and question answering
//! - `openai` - Chat client construction
//! - `cli` - Argument parsing and the interactive question loop
//!
//! # Example
//!
//! ```rust,no_run
//! use tldw::config::{Provider, Settings};
//! use tldw::llm::ChatModel;
//! use tldw::transcript::TranscriptFetcher;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::from_env();
//!     let config = settings.provider_config(Provider::Venice)?;
//!
//!     let transcript = TranscriptFetcher::new()?.fetch("dQw4w9WgXcQ").await?;
//!     let summary = ChatModel::new(&config).summarize(&transcript, None).await?;
//!     println!("{}", summary);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod openai;
pub mod transcript;
pub mod youtube;

pub use error::{Result, TldwError};
