// Entrypoint for the CLI application.
// - No subcommand: the interactive journal form.
// - `from-file [PATH]`: post one entry from a text file (defaults to
//   the conventional `journal.txt`) and report on stdout.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use journal_cli::config::Config;
use journal_cli::notion::NotionClient;
use journal_cli::revise::OpenAiClient;
use journal_cli::{file_flow, ui};

#[derive(Parser, Debug)]
#[command(name = "journal-cli")]
#[command(about = "Post journal entries to Notion, optionally revised by an LLM first")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Post a single entry from a text file (line 1: "Title: <title>")
    FromFile {
        /// Journal file to read
        #[arg(default_value = "journal.txt")]
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::FromFile { path }) => {
            // The file flow reports every problem as one diagnostic
            // line and exits normally.
            if let Err(e) = run_from_file(&path) {
                println!("Error: {}", e);
            }
            Ok(())
        }
        None => {
            let config = Config::from_env()?;
            let notion = NotionClient::new(&config)?;
            let openai = OpenAiClient::new(&config)?;

            // Start the interactive form. This call blocks until the
            // user quits.
            ui::run_form(&notion, &openai)
        }
    }
}

fn run_from_file(path: &Path) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let notion = NotionClient::new(&config)?;
    file_flow::run(path, &notion)
}
