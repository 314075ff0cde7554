//! Summarize command: fetch, summarize, then answer questions interactively.

use super::fetch_transcript;
use crate::cli::Output;
use crate::config::{Provider, Settings};
use crate::error::Result;
use crate::llm::ChatModel;
use console::style;
use std::io::{self, BufRead, Write};

/// Run the default flow: summarize the video, then enter the question loop.
pub async fn run_summarize(
    video_id: &str,
    provider: Provider,
    custom_prompt: Option<String>,
    settings: Settings,
) -> Result<()> {
    // Resolve credentials before any network call.
    let config = settings.provider_config(provider)?;

    let transcript = fetch_transcript(video_id).await?;

    let model = ChatModel::new(&config);

    let spinner = Output::spinner(&format!(
        "Summarizing with {} API...",
        provider.display_name()
    ));
    let result = model.summarize(&transcript, custom_prompt.as_deref()).await;
    spinner.finish_and_clear();
    let summary = result?;

    Output::header("Video Summary");
    println!("\n{}\n", summary);

    question_loop(&model, &transcript).await
}

/// What to do with one line of question-loop input.
#[derive(Debug, PartialEq, Eq)]
enum LoopAction {
    Ask(String),
    Skip,
    Quit,
}

/// Classify one trimmed line of input. The "exit" sentinel is matched
/// case-insensitively and ends the loop without another LLM call.
fn classify_input(line: &str) -> LoopAction {
    let line = line.trim();
    if line.is_empty() {
        LoopAction::Skip
    } else if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
        LoopAction::Quit
    } else {
        LoopAction::Ask(line.to_string())
    }
}

/// Blocking read-evaluate loop over stdin until the user types "exit".
async fn question_loop(model: &ChatModel, transcript: &str) -> Result<()> {
    println!(
        "{}",
        style("Ask a question about the video, or type 'exit' to quit.").dim()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("\n{} ", style("Question:").green().bold());
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break; // EOF
        }

        let question = match classify_input(&input) {
            LoopAction::Ask(question) => question,
            LoopAction::Skip => continue,
            LoopAction::Quit => break,
        };

        let spinner = Output::spinner("Thinking...");
        let result = model.answer(transcript, &question).await;
        spinner.finish_and_clear();

        let answer = result?;
        println!("\n{} {}", style("Answer:").cyan().bold(), answer);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_is_case_insensitive() {
        assert_eq!(classify_input("exit"), LoopAction::Quit);
        assert_eq!(classify_input("EXIT"), LoopAction::Quit);
        assert_eq!(classify_input("Exit\n"), LoopAction::Quit);
        assert_eq!(classify_input("quit"), LoopAction::Quit);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        assert_eq!(classify_input(""), LoopAction::Skip);
        assert_eq!(classify_input("   \n"), LoopAction::Skip);
    }

    #[test]
    fn test_questions_pass_through_trimmed() {
        assert_eq!(
            classify_input("  What is this video about?\n"),
            LoopAction::Ask("What is this video about?".to_string())
        );
    }
}
