//! The analysis bridge: a one-shot call to an external chat-completions
//! endpoint, followed by best-effort normalization of its reply into a
//! structured [`VocabAnalysis`][wordstash_core::analysis::VocabAnalysis].
//!
//! Nothing here persists anything; callers store the result onto the
//! entry only after the whole pipeline has succeeded.

mod analyzer;
mod client;
mod errors;
mod extract;
mod prompt;
mod response;

pub use analyzer::Analyzer;
pub use client::{ChatCompletionsClient, CompletionClient};
pub use errors::AnalysisError;
