//! Query responder state machine.
//!
//! Terminal states per query: ANSWERED (remote summary composed into a
//! full reply), WARMING_UP (remote model still loading; caller may retry),
//! FALLBACK (any other remote failure, answered locally), or EMPTY_QUERY.
//! Whatever happens upstream, the caller always receives usable text.

use astrobib_ingestion::Record;
use tracing::{debug, warn};

use crate::backend::{Summarizer, SummarizerError};
use crate::fallback::local_answer;

/// Candidate cap for query-relevant context.
const MAX_CANDIDATES: usize = 15;

/// How many leading records serve as generic context when nothing matches.
const GENERIC_CONTEXT_RECORDS: usize = 20;

/// Context is truncated to this many characters before transmission.
const MAX_CONTEXT_CHARS: usize = 1024;

const EMPTY_QUERY_PROMPT: &str = "Please enter a research question to analyze.";

const WARMUP_MESSAGE: &str =
    "AI model is warming up (first use takes ~20 seconds). Please wait a moment and ask again.";

const ATTRIBUTION: &str = "Powered by Hugging Face BART AI";

/// Which terminal state produced the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    Answered,
    Fallback,
    WarmingUp,
    EmptyQuery,
}

/// A finished answer. `text` is always well-formed and displayable.
#[derive(Debug, Clone, serde::Serialize)]
pub struct InsightAnswer {
    pub kind: AnswerKind,
    pub text: String,
}

pub struct QueryResponder {
    summarizer: Box<dyn Summarizer>,
}

impl QueryResponder {
    pub fn new(summarizer: Box<dyn Summarizer>) -> Self {
        Self { summarizer }
    }

    /// Answer a free-text question against a corpus snapshot.
    ///
    /// Suspends only for the single remote summarization attempt. Never
    /// returns an error: remote failures resolve to FALLBACK and the
    /// warm-up condition to a distinct retryable message.
    pub async fn submit_query(&self, query: &str, records: &[Record]) -> InsightAnswer {
        let query = query.trim();
        if query.is_empty() {
            return InsightAnswer { kind: AnswerKind::EmptyQuery, text: EMPTY_QUERY_PROMPT.into() };
        }

        let candidates = select_candidates(query, records);
        let matched = candidates.len();
        let context_pool: Vec<&Record> = if candidates.is_empty() {
            records.iter().take(GENERIC_CONTEXT_RECORDS).collect()
        } else {
            candidates
        };
        let context = bounded_context(&context_pool);
        let prompt =
            format!("Based on NASA space biology research about {query}, summarize: {context}");

        match self.summarizer.summarize(&prompt).await {
            Ok(summary) => {
                debug!(matched, "remote summarization succeeded");
                InsightAnswer {
                    kind: AnswerKind::Answered,
                    text: compose_answer(query, &summary, records.len(), matched),
                }
            }
            Err(SummarizerError::ModelLoading(message)) => {
                debug!(%message, "remote model still loading");
                InsightAnswer { kind: AnswerKind::WarmingUp, text: WARMUP_MESSAGE.into() }
            }
            Err(e) => {
                warn!(error = %e, "remote summarization failed, answering locally");
                InsightAnswer { kind: AnswerKind::Fallback, text: local_answer(query, records) }
            }
        }
    }
}

/// Scan the corpus in order for records whose title, topic, or abstract
/// contains the query text, capped at the first `MAX_CANDIDATES` hits.
fn select_candidates<'a>(query: &str, records: &'a [Record]) -> Vec<&'a Record> {
    let q = query.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.title.to_lowercase().contains(&q)
                || r.topic.as_str().to_lowercase().contains(&q)
                || r.abstract_text.to_lowercase().contains(&q)
        })
        .take(MAX_CANDIDATES)
        .collect()
}

/// Concatenate "title. abstract" per candidate and truncate to the wire
/// budget on a character boundary.
fn bounded_context(records: &[&Record]) -> String {
    let joined = records
        .iter()
        .map(|r| format!("{}. {}", r.title, r.abstract_text))
        .collect::<Vec<_>>()
        .join(" ");
    joined.chars().take(MAX_CONTEXT_CHARS).collect()
}

fn compose_answer(query: &str, summary: &str, total: usize, matched: usize) -> String {
    format!(
        "**AI-Powered Analysis**\n\n\
         **Query:** {query}\n\n\
         **AI Summary:**\n{summary}\n\n\
         **Statistics:**\n\
         - Total analyzed: {total} publications\n\
         - Relevant to query: {matched} publications\n\n\
         {ATTRIBUTION}"
    )
}
