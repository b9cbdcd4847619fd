pub mod vocab_entry;

pub use vocab_entry::{
    NewVocabEntry,
    VocabEntryModel,
    VocabEntryMutation,
    VocabEntryQuery,
};
