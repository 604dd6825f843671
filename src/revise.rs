// Text Reviser: sends an English diary entry to the OpenAI
// chat-completion endpoint with a fixed instructional prompt and
// splits the single text reply into a revised version and a Japanese
// explanation of what changed.

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;
use std::sync::OnceLock;

use crate::config::Config;
use crate::flow::TextReviser;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const MODEL: &str = "gpt-4o";
const TEMPERATURE: f64 = 0.7;

/// Shown as the explanation when the reply lacks the 【解説】 section.
const EXPLANATION_FALLBACK: &str = "（解説の取得に失敗しました）";

/// The reviser's output. `explanation` falls back to a fixed string
/// when the model ignores the requested format; `revised` falls back
/// to the empty string.
#[derive(Debug, Clone)]
pub struct Revision {
    pub revised: String,
    pub explanation: String,
}

/// Blocking client for the chat-completion endpoint. Model and
/// sampling temperature are fixed.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(OpenAiClient {
            client,
            api_key: config.openai_api_key.clone(),
        })
    }

    /// One chat-completion round trip: templated prompt in, first
    /// choice's message text out, split on the two literal markers.
    /// Malformed model output degrades to empty/fallback fields; only
    /// HTTP-level problems surface as errors.
    pub fn revise_with_explanation(&self, text: &str) -> Result<Revision> {
        let body = json!({
            "model": MODEL,
            "messages": [{ "role": "user", "content": revision_prompt(text) }],
            "temperature": TEMPERATURE,
        });

        let res = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .context("Failed to send chat-completion request")?;

        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("Chat completion failed: {} - {}", status, txt);
        }

        let parsed: ChatResponse = res.json().context("Parsing chat-completion json")?;
        let full_reply = parsed
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| anyhow!("Chat completion returned no choices"))?;

        Ok(split_revision(&full_reply))
    }
}

impl TextReviser for OpenAiClient {
    fn revise(&self, text: &str) -> Result<Revision> {
        self.revise_with_explanation(text)
    }
}

/// The fixed instructional template: an English-teacher persona asked
/// to rewrite the diary naturally and explain the changes in Japanese,
/// answering under the 【添削後】 and 【解説】 markers.
fn revision_prompt(text: &str) -> String {
    format!(
        "あなたは英語教師です。\n\
         以下の英語日記を、より自然な英語になるように添削してください。\n\
         その後、どのような点を修正したのかを、日本語で簡単に解説してください。\n\
         \n\
         【日記】\n\
         {text}\n\
         \n\
         以下のフォーマットで返してください：\n\
         \n\
         【添削後】\n\
         <添削した文章>\n\
         \n\
         【解説】\n\
         <修正ポイントの日本語解説>\n"
    )
}

fn revised_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    // Non-greedy and dot-matches-newline: the revised section ends at
    // the first explanation marker.
    REGEX.get_or_init(|| Regex::new(r"(?s)【添削後】\s*(.*?)\s*【解説】").unwrap())
}

fn explanation_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?s)【解説】\s*(.*)").unwrap())
}

/// Split a full model reply into its two sections. Each section is
/// trimmed; a missing first marker pair yields an empty revision and a
/// missing explanation marker yields the fixed fallback string.
pub fn split_revision(full_reply: &str) -> Revision {
    let revised = revised_regex()
        .captures(full_reply)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default();

    let explanation = explanation_regex()
        .captures(full_reply)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_else(|| EXPLANATION_FALLBACK.to_string());

    Revision {
        revised,
        explanation,
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}
