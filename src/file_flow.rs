// File-driven entry point: reads a title/body pair from a plain text
// file and posts it as one journal entry. The file convention is
// line 1 = `Title: <title>`, everything after = the body.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::entry::JournalEntry;
use crate::flow::EntrySink;

const TITLE_PREFIX: &str = "Title:";

/// Split a journal file into (title, content). Fails when the first
/// line does not carry the `Title:` prefix.
pub fn parse_journal_file(text: &str) -> Result<(String, String)> {
    let mut lines = text.lines();
    let first = lines.next().unwrap_or("");
    if !first.starts_with(TITLE_PREFIX) {
        bail!("The first line must name the title in the form 'Title: <title>'");
    }

    let title = first[TITLE_PREFIX.len()..].trim().to_string();
    let content = lines.collect::<Vec<_>>().join("\n").trim().to_string();
    Ok((title, content))
}

/// Read the file, parse it and post the entry once, printing the
/// outcome. On a rejected request the status and raw response body go
/// to stdout, since there is no UI to hide them behind.
pub fn run(path: &Path, sink: &dyn EntrySink) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let (title, content) = parse_journal_file(&text)?;

    let outcome = sink.create(&JournalEntry::new(title, content))?;
    if outcome.created {
        println!("Journal entry created!");
    } else {
        println!("Error: HTTP {}", outcome.status);
        println!("{}", outcome.body);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notion::CreateOutcome;
    use std::cell::RefCell;

    #[test]
    fn parses_title_line_and_body() {
        let (title, content) = parse_journal_file("Title: My Day\nHello world.\n").unwrap();
        assert_eq!(title, "My Day");
        assert_eq!(content, "Hello world.");
    }

    #[test]
    fn body_keeps_interior_newlines() {
        let (_, content) =
            parse_journal_file("Title: t\nFirst line.\nSecond line.\n").unwrap();
        assert_eq!(content, "First line.\nSecond line.");
    }

    #[test]
    fn missing_title_prefix_is_rejected() {
        let err = parse_journal_file("My Day\nHello.\n").unwrap_err();
        assert!(err.to_string().contains("Title: <title>"));
    }

    #[test]
    fn empty_file_is_rejected() {
        assert!(parse_journal_file("").is_err());
    }

    #[test]
    fn title_only_file_yields_empty_content() {
        let (title, content) = parse_journal_file("Title: Just a title\n").unwrap();
        assert_eq!(title, "Just a title");
        assert_eq!(content, "");
    }

    struct CountingSink(RefCell<usize>);

    impl EntrySink for CountingSink {
        fn create(&self, _entry: &JournalEntry) -> Result<CreateOutcome> {
            *self.0.borrow_mut() += 1;
            Ok(CreateOutcome {
                created: true,
                status: 200,
                body: String::new(),
            })
        }
    }

    #[test]
    fn bad_header_never_reaches_the_sink() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.txt");
        fs::write(&path, "No header here\n").unwrap();

        let sink = CountingSink(RefCell::new(0));
        assert!(run(&path, &sink).is_err());
        assert_eq!(*sink.0.borrow(), 0);
    }

    #[test]
    fn valid_file_posts_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.txt");
        fs::write(&path, "Title: My Day\nHello world.\n").unwrap();

        let sink = CountingSink(RefCell::new(0));
        run(&path, &sink).unwrap();
        assert_eq!(*sink.0.borrow(), 1);
    }
}
