// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the two entry points.
//
// Module responsibilities:
// - `config`: reads the three secrets from the environment once at
//   startup and hands them out as an explicit struct.
// - `entry`: the `JournalEntry` value built per submission.
// - `notion`: blocking HTTP client for the Notion page-creation
//   endpoint (the system of record).
// - `revise`: blocking HTTP client for the OpenAI chat-completion
//   endpoint, plus the marker-based response splitting.
// - `flow`: the two submission operations behind small traits, so the
//   core logic runs against fakes in tests.
// - `ui`: the interactive terminal form.
// - `file_flow`: the non-interactive `journal.txt` entry point.
pub mod config;
pub mod entry;
pub mod file_flow;
pub mod flow;
pub mod notion;
pub mod revise;
pub mod ui;
