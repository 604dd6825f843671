// The journal entry value built for each submission. Entries are
// transient: created by an entry point, serialized into one Notion
// request, then dropped. Nothing is persisted locally.

use chrono::{Local, NaiveDate};

/// One journal entry headed for the document database.
#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
}

impl JournalEntry {
    /// Build an entry dated today.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        JournalEntry {
            title: title.into(),
            content: content.into(),
            date: Local::now().date_naive(),
        }
    }

    /// The entry date as the ISO `YYYY-MM-DD` string Notion expects.
    pub fn date_iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
