use assert_cmd::Command;
use std::path::Path;

/// Binary invocation isolated from the caller's environment: the three
/// secrets are cleared and the working directory is pinned so a stray
/// `.env` cannot leak in.
pub fn journal_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("journal-cli").unwrap();
    cmd.env_remove("NOTION_TOKEN");
    cmd.env_remove("NOTION_DATABASE_ID");
    cmd.env_remove("OPENAI_API_KEY");
    cmd.current_dir(dir);
    cmd
}

/// Same, but with placeholder secrets so configuration loading passes.
/// Only useful for paths that fail before any HTTP request is sent.
pub fn journal_cmd_with_fake_secrets(dir: &Path) -> Command {
    let mut cmd = journal_cmd(dir);
    cmd.env("NOTION_TOKEN", "test-token");
    cmd.env("NOTION_DATABASE_ID", "test-db");
    cmd.env("OPENAI_API_KEY", "test-key");
    cmd
}
