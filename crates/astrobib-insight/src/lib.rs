//! astrobib-insight — free-text question answering over the corpus.
//!
//! A query flows through a small state machine: empty-input guard,
//! candidate selection from the corpus, one remote summarization attempt,
//! then either a composed answer, a "model warming up" notice, or a
//! deterministic local fallback. Every path terminates in a well-formed
//! textual answer; no failure escapes to the caller.

pub mod backend;
pub mod fallback;
pub mod responder;

pub use backend::{BartSummarizer, Summarizer, SummarizerError};
pub use responder::{AnswerKind, InsightAnswer, QueryResponder};
