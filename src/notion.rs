// Entry Creator: a small blocking HTTP client that creates pages in a
// Notion database. One call creates exactly one page; there is no
// idempotency key, so duplicate calls create duplicate pages.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::{json, Value};

use crate::config::Config;
use crate::entry::JournalEntry;
use crate::flow::EntrySink;

const PAGES_URL: &str = "https://api.notion.com/v1/pages";
const NOTION_VERSION: &str = "2022-06-28";

/// Report from one page-creation attempt. `created` is the only value
/// callers branch on; `status` and `body` exist for the diagnostic
/// line the file-driven flow prints on failure.
#[derive(Debug)]
pub struct CreateOutcome {
    pub created: bool,
    pub status: u16,
    pub body: String,
}

/// Blocking client for the Notion pages endpoint. Holds the bearer
/// token and API-version header for every request.
#[derive(Clone)]
pub struct NotionClient {
    client: Client,
    database_id: String,
}

impl NotionClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {}", config.notion_token);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&bearer).context("Notion token is not a valid header value")?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("Notion-Version", HeaderValue::from_static(NOTION_VERSION));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(NotionClient {
            client,
            database_id: config.notion_database_id.clone(),
        })
    }

    /// POST one page-creation request. A non-2xx status is reported
    /// through `CreateOutcome.created`, not as an error; only transport
    /// failures produce `Err`.
    pub fn create_entry(&self, entry: &JournalEntry) -> Result<CreateOutcome> {
        let payload = page_payload(&self.database_id, entry);
        let res = self
            .client
            .post(PAGES_URL)
            .json(&payload)
            .send()
            .context("Failed to send page-creation request")?;

        let status = res.status();
        let body = res.text().unwrap_or_else(|_| "".into());
        Ok(CreateOutcome {
            created: status.as_u16() == 200 || status.as_u16() == 201,
            status: status.as_u16(),
            body,
        })
    }
}

impl EntrySink for NotionClient {
    fn create(&self, entry: &JournalEntry) -> Result<CreateOutcome> {
        self.create_entry(entry)
    }
}

/// The page-creation body: Title, Date (ISO start) and Content
/// properties, plus one paragraph block mirroring the content so the
/// text shows up in the page body as well as the database column.
fn page_payload(database_id: &str, entry: &JournalEntry) -> Value {
    json!({
        "parent": { "database_id": database_id },
        "properties": {
            "Title": {
                "title": [{ "text": { "content": entry.title } }]
            },
            "Date": {
                "date": { "start": entry.date_iso() }
            },
            "Content": {
                "rich_text": [{ "text": { "content": entry.content } }]
            }
        },
        "children": [
            {
                "object": "block",
                "type": "paragraph",
                "paragraph": {
                    "rich_text": [{
                        "type": "text",
                        "text": { "content": entry.content }
                    }]
                }
            }
        ]
    })
}
