//! Shared vocabulary for the Wordstash backend: typed identifiers,
//! the structured analysis payload, and the date-grouping helper.

pub mod analysis;
pub mod grouping;
pub mod id;
