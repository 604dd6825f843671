// UI layer: the interactive journal form, built with `dialoguer`.
// Collects a title and a multi-line body, then offers the two
// submission actions. Each pass through the loop is one independent
// submission; nothing is carried over to the next.

use anyhow::Result;
use chrono::Local;
use dialoguer::{Editor, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::flow::{self, ReviseProgress, SubmitOutcome};
use crate::notion::NotionClient;
use crate::revise::OpenAiClient;

/// Run the form loop until the user quits. Blocks for the lifetime of
/// the session; every action performs its HTTP calls inline.
pub fn run_form(notion: &NotionClient, openai: &OpenAiClient) -> Result<()> {
    loop {
        let default_title = Local::now().date_naive().format("%Y-%m-%d").to_string();
        let title: String = Input::new()
            .with_prompt("Title")
            .default(default_title)
            .interact_text()?;

        // `Editor` opens $EDITOR for the multi-line body. Closing the
        // editor without saving counts as an empty entry.
        let content = Editor::new().edit("")?.unwrap_or_default();

        let items = vec!["Post as written", "Revise with AI, then post", "Quit"];
        let selection = Select::new().items(&items).default(0).interact()?;
        match selection {
            0 => match flow::submit_direct(notion, &title, &content)? {
                SubmitOutcome::EmptyContent => println!("Content cannot be empty."),
                SubmitOutcome::Posted { .. } => println!("Journal entry created!"),
                SubmitOutcome::Failed => println!("Error creating journal entry."),
            },
            1 => {
                let progress = SpinnerProgress::new("Revising...");
                match flow::submit_revised(notion, openai, &progress, &title, &content) {
                    Ok(SubmitOutcome::EmptyContent) => println!("Content cannot be empty."),
                    Ok(SubmitOutcome::Posted { revision }) => {
                        println!("Revised and posted!");
                        if let Some(revision) = revision {
                            println!("\n--- Revised entry ---");
                            println!("{}", revision.revised);
                            println!("\n--- What changed ---");
                            println!("{}", revision.explanation);
                        }
                    }
                    Ok(SubmitOutcome::Failed) => println!("Error posting the revised entry."),
                    // Revision call failed outright; report and let the
                    // user try again from the top of the form.
                    Err(e) => println!("Revision failed: {}", e),
                }
            }
            2 => break,
            _ => {}
        }
        println!();
    }
    Ok(())
}

/// indicatif spinner driven through the `ReviseProgress` hooks, so the
/// submission core stays free of terminal concerns.
struct SpinnerProgress {
    spinner: ProgressBar,
}

impl SpinnerProgress {
    fn new(message: &'static str) -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
        spinner.set_message(message);
        SpinnerProgress { spinner }
    }
}

impl ReviseProgress for SpinnerProgress {
    fn started(&self) {
        // Tick on a timer; the HTTP calls block this thread.
        self.spinner.enable_steady_tick(Duration::from_millis(100));
    }

    fn finished(&self) {
        self.spinner.finish_and_clear();
    }
}
