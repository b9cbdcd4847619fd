use sqlx::PgConnection;
use wordstash_core::id::VocabEntryId;

use crate::{QueryResult, TryIntoExternalModel};


pub struct VocabEntryQuery;

impl VocabEntryQuery {
    pub async fn get_by_id(
        connection: &mut PgConnection,
        vocab_entry_id: VocabEntryId,
    ) -> QueryResult<Option<super::VocabEntryModel>> {
        let intermediate_model = sqlx::query_as::<_, super::IntermediateVocabEntryModel>(
            "SELECT id, content, date_group, pos, translation, ai_analysis, created_at \
                FROM wordstash.vocab_entry \
                WHERE id = $1",
        )
        .bind(vocab_entry_id.into_uuid())
        .fetch_optional(connection)
        .await?;

        intermediate_model
            .map(super::IntermediateVocabEntryModel::try_into_external_model)
            .transpose()
    }

    /// Returns every entry, newest date group first and newest entry first
    /// within each date group. This ordering is what the grouping helper
    /// downstream relies on.
    pub async fn get_all_ordered(
        connection: &mut PgConnection,
    ) -> QueryResult<Vec<super::VocabEntryModel>> {
        let intermediate_models = sqlx::query_as::<_, super::IntermediateVocabEntryModel>(
            "SELECT id, content, date_group, pos, translation, ai_analysis, created_at \
                FROM wordstash.vocab_entry \
                ORDER BY date_group DESC, created_at DESC",
        )
        .fetch_all(connection)
        .await?;

        intermediate_models
            .into_iter()
            .map(super::IntermediateVocabEntryModel::try_into_external_model)
            .collect()
    }
}
