//! Summarization and question answering over a transcript.
//!
//! Each operation issues exactly one chat completion with a bounded output
//! length and no retry; transport and API errors propagate to the caller.

use crate::config::ProviderConfig;
use crate::error::{Result, TldwError};
use crate::openai::create_client;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use tracing::debug;

/// Output budget for each completion.
const MAX_COMPLETION_TOKENS: u32 = 300;

/// Sampling temperature for each completion.
const TEMPERATURE: f32 = 0.7;

/// Build the summarization prompt.
///
/// A custom instruction, when given, is prefixed before the transcript in
/// place of the default template.
pub fn build_summary_prompt(transcript: &str, custom_prompt: Option<&str>) -> String {
    match custom_prompt {
        Some(custom) => format!("{}\n\n{}", custom, transcript),
        None => format!(
            "Summarize the following YouTube video transcript:\n\n{}\n\nSummary:",
            transcript
        ),
    }
}

/// Build the question-answering prompt embedding the transcript and question.
pub fn build_question_prompt(transcript: &str, question: &str) -> String {
    format!(
        "Based on the following YouTube video transcript, answer the user's question as accurately as possible.\n\nTranscript:\n{}\n\nQuestion: {}\n\nAnswer:",
        transcript, question
    )
}

/// A chat model bound to one provider's endpoint and credentials.
pub struct ChatModel {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
}

impl ChatModel {
    /// Create a model handle from a resolved provider configuration.
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            client: create_client(config),
            model: config.model.clone(),
        }
    }

    /// Summarize a transcript, optionally steered by a custom instruction.
    pub async fn summarize(&self, transcript: &str, custom_prompt: Option<&str>) -> Result<String> {
        self.complete(build_summary_prompt(transcript, custom_prompt))
            .await
    }

    /// Answer a question about a transcript.
    pub async fn answer(&self, transcript: &str, question: &str) -> Result<String> {
        self.complete(build_question_prompt(transcript, question))
            .await
    }

    /// Issue a single chat completion and return the trimmed first-choice text.
    async fn complete(&self, prompt: String) -> Result<String> {
        debug!("Requesting completion from model {}", self.model);

        let messages: Vec<ChatCompletionRequestMessage> =
            vec![ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| TldwError::OpenAI(e.to_string()))?
                .into()];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .max_tokens(MAX_COMPLETION_TOKENS)
            .temperature(TEMPERATURE)
            .build()
            .map_err(|e| TldwError::OpenAI(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| TldwError::OpenAI(format!("Chat API error: {}", e)))?;

        let answer = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .ok_or_else(|| TldwError::OpenAI("Empty response from model".to_string()))?;

        Ok(answer.trim().to_string())
    }
}
