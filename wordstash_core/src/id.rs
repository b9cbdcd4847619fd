use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;


/// Identifier of a single vocab entry.
///
/// Generated as a UUID version 7 so freshly captured entries sort by
/// creation time, and rendered in the simple (non-hyphenated) format
/// on the wire.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct VocabEntryId(#[serde(with = "uuid::serde::simple")] Uuid);

impl VocabEntryId {
    #[inline]
    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[inline]
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    #[inline]
    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl FromStr for VocabEntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

impl Display for VocabEntryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.as_simple().fmt(f)
    }
}


#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn parses_both_simple_and_hyphenated_formats() {
        let hyphenated = "018dbe00-266e-7398-abd2-0906df0aa345";
        let simple = "018dbe00266e7398abd20906df0aa345";

        let from_hyphenated = VocabEntryId::from_str(hyphenated).unwrap();
        let from_simple = VocabEntryId::from_str(simple).unwrap();

        assert_eq!(from_hyphenated, from_simple);
        assert_eq!(from_hyphenated.to_string(), simple);
    }

    #[test]
    fn serializes_transparently_as_simple_uuid_string() {
        let id = VocabEntryId::from_str("018dbe00266e7398abd20906df0aa345").unwrap();

        let serialized = serde_json::to_value(id).unwrap();

        assert_eq!(
            serialized,
            serde_json::Value::String("018dbe00266e7398abd20906df0aa345".to_string())
        );
    }

    #[test]
    fn generated_identifiers_are_version_7_and_unique() {
        let first = VocabEntryId::generate();
        let second = VocabEntryId::generate();

        assert_ne!(first, second);
        assert_eq!(first.into_uuid().get_version_num(), 7);
    }
}
