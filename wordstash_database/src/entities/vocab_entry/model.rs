use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;
use wordstash_core::analysis::VocabAnalysis;
use wordstash_core::id::VocabEntryId;

use crate::{QueryError, TryIntoExternalModel};


pub struct VocabEntryModel {
    pub id: VocabEntryId,

    pub content: String,

    pub date_group: NaiveDate,

    pub pos: Option<String>,

    pub translation: Option<String>,

    pub ai_analysis: Option<VocabAnalysis>,

    pub created_at: DateTime<Utc>,
}


#[derive(sqlx::FromRow)]
pub(super) struct IntermediateVocabEntryModel {
    pub(super) id: Uuid,

    pub(super) content: String,

    pub(super) date_group: NaiveDate,

    pub(super) pos: Option<String>,

    pub(super) translation: Option<String>,

    pub(super) ai_analysis: Option<serde_json::Value>,

    pub(super) created_at: DateTime<Utc>,
}

impl TryIntoExternalModel for IntermediateVocabEntryModel {
    type ExternalModel = VocabEntryModel;
    type Error = QueryError;

    fn try_into_external_model(self) -> Result<Self::ExternalModel, Self::Error> {
        // A stored analysis is always a complete object; a row that fails
        // to deserialize here means something else wrote to the column.
        let ai_analysis = self
            .ai_analysis
            .map(serde_json::from_value::<VocabAnalysis>)
            .transpose()
            .map_err(|_| {
                QueryError::model_error(
                    "stored ai_analysis payload does not describe a complete analysis",
                )
            })?;

        Ok(Self::ExternalModel {
            id: VocabEntryId::new(self.id),
            content: self.content,
            date_group: self.date_group,
            pos: self.pos,
            translation: self.translation,
            ai_analysis,
            created_at: self.created_at,
        })
    }
}
