use serde::{Deserialize, Serialize};


/// Structured linguistic analysis of a single vocabulary entry,
/// as produced by the external language model.
///
/// This is persisted onto the entry verbatim after a successful parse;
/// a partially-filled analysis is never stored.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct VocabAnalysis {
    /// Part of speech, e.g. `n.` or `v.`.
    pub pos: String,

    /// Chinese translation.
    pub cn: String,

    /// Etymology or word-root breakdown.
    pub etymology: String,

    /// Example sentences, in the order the model produced them.
    pub sentences: Vec<String>,

    /// Memorization tips.
    pub tips: String,
}
