mod model;
mod mutation;
mod query;

use model::IntermediateVocabEntryModel;
pub use model::VocabEntryModel;
pub use mutation::{NewVocabEntry, VocabEntryMutation};
pub use query::VocabEntryQuery;
