// Submission core: the two form actions ("post as written" and
// "revise, then post") expressed against small traits so the logic is
// exercised in tests with fakes instead of a terminal and live HTTP.

use anyhow::Result;

use crate::entry::JournalEntry;
use crate::notion::CreateOutcome;
use crate::revise::Revision;

/// Destination for finished entries. Implemented by `NotionClient`.
pub trait EntrySink {
    fn create(&self, entry: &JournalEntry) -> Result<CreateOutcome>;
}

/// The revision service. Implemented by `OpenAiClient`.
pub trait TextReviser {
    fn revise(&self, text: &str) -> Result<Revision>;
}

/// Transient-status hooks around the revise-then-post round trip.
/// `finished` runs on every path, before any final notice.
pub trait ReviseProgress {
    fn started(&self);
    fn finished(&self);
}

/// Result of one submission. `Posted` carries the revision for display
/// when the revise path succeeded; a failed create discards it.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Whitespace-only content; nothing was sent.
    EmptyContent,
    Posted { revision: Option<Revision> },
    Failed,
}

/// Post the content as written. Empty content never reaches the sink;
/// otherwise exactly one create call is made with the content
/// untouched.
pub fn submit_direct(sink: &dyn EntrySink, title: &str, content: &str) -> Result<SubmitOutcome> {
    if content.trim().is_empty() {
        return Ok(SubmitOutcome::EmptyContent);
    }
    let entry = JournalEntry::new(title, content);
    let outcome = sink.create(&entry)?;
    Ok(if outcome.created {
        SubmitOutcome::Posted { revision: None }
    } else {
        SubmitOutcome::Failed
    })
}

/// Revise the content, then post the revised text. The entry is
/// created with whatever the reviser extracted, even an empty string.
/// The progress hooks bracket both remote calls.
pub fn submit_revised(
    sink: &dyn EntrySink,
    reviser: &dyn TextReviser,
    progress: &dyn ReviseProgress,
    title: &str,
    content: &str,
) -> Result<SubmitOutcome> {
    if content.trim().is_empty() {
        return Ok(SubmitOutcome::EmptyContent);
    }

    progress.started();
    let result = revise_and_create(sink, reviser, title, content);
    // Clear the transient status before reporting anything, including
    // propagated errors.
    progress.finished();

    let (revision, outcome) = result?;
    Ok(if outcome.created {
        SubmitOutcome::Posted {
            revision: Some(revision),
        }
    } else {
        SubmitOutcome::Failed
    })
}

fn revise_and_create(
    sink: &dyn EntrySink,
    reviser: &dyn TextReviser,
    title: &str,
    content: &str,
) -> Result<(Revision, CreateOutcome)> {
    let revision = reviser.revise(content)?;
    let entry = JournalEntry::new(title, revision.revised.clone());
    let outcome = sink.create(&entry)?;
    Ok((revision, outcome))
}
