use chrono::Utc;
use sqlx::PgConnection;
use wordstash_core::analysis::VocabAnalysis;
use wordstash_core::id::VocabEntryId;

use crate::{QueryError, QueryResult, TryIntoExternalModel};


#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NewVocabEntry {
    pub content: String,
}



pub struct VocabEntryMutation;

impl VocabEntryMutation {
    pub async fn create(
        connection: &mut PgConnection,
        entry_to_create: NewVocabEntry,
    ) -> QueryResult<super::VocabEntryModel> {
        let new_entry_id = VocabEntryId::generate();
        let new_entry_created_at = Utc::now();
        // The date group is captured from the server clock at creation
        // and is immutable afterwards.
        let new_entry_date_group = new_entry_created_at.date_naive();

        let intermediate_model = sqlx::query_as::<_, super::IntermediateVocabEntryModel>(
            "INSERT INTO wordstash.vocab_entry (id, content, date_group, created_at) \
                VALUES ($1, $2, $3, $4) \
                RETURNING id, content, date_group, pos, translation, ai_analysis, created_at",
        )
        .bind(new_entry_id.into_uuid())
        .bind(&entry_to_create.content)
        .bind(new_entry_date_group)
        .bind(new_entry_created_at)
        .fetch_one(connection)
        .await?;

        intermediate_model.try_into_external_model()
    }

    /// Persists a successfully parsed analysis onto an entry, overwriting
    /// any previous one. Returns `None` when the entry no longer exists.
    pub async fn store_analysis(
        connection: &mut PgConnection,
        vocab_entry_id: VocabEntryId,
        analysis: &VocabAnalysis,
    ) -> QueryResult<Option<super::VocabEntryModel>> {
        let analysis_payload = serde_json::to_value(analysis)
            .map_err(|_| QueryError::model_error("analysis payload is not serializable"))?;

        let intermediate_model = sqlx::query_as::<_, super::IntermediateVocabEntryModel>(
            "UPDATE wordstash.vocab_entry \
                SET pos = $1, translation = $2, ai_analysis = $3 \
                WHERE id = $4 \
                RETURNING id, content, date_group, pos, translation, ai_analysis, created_at",
        )
        .bind(&analysis.pos)
        .bind(&analysis.cn)
        .bind(analysis_payload)
        .bind(vocab_entry_id.into_uuid())
        .fetch_optional(connection)
        .await?;

        intermediate_model
            .map(super::IntermediateVocabEntryModel::try_into_external_model)
            .transpose()
    }

    /// Hard-deletes an entry. Returns `false` when no such entry existed.
    pub async fn delete(
        connection: &mut PgConnection,
        vocab_entry_id: VocabEntryId,
    ) -> QueryResult<bool> {
        let query_result = sqlx::query(
            "DELETE FROM wordstash.vocab_entry \
                WHERE id = $1",
        )
        .bind(vocab_entry_id.into_uuid())
        .execute(connection)
        .await?;

        if query_result.rows_affected() > 1 {
            return Err(QueryError::database_inconsistency(
                "more than one row was affected when deleting a vocab entry",
            ));
        }

        Ok(query_result.rows_affected() == 1)
    }
}
