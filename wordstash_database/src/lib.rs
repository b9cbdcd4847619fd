//! PostgreSQL access for the Wordstash backend.
//!
//! Entities live under [`entities`], each split into its `model`,
//! `query` and `mutation` halves. Queries use the runtime `sqlx` API
//! (no compile-time checked macros), so this crate builds without a
//! live database.

use std::borrow::Cow;

use sqlx::PgPool;
use thiserror::Error;
use tracing::debug;

pub mod entities;



#[derive(Debug, Error)]
pub enum QueryError {
    #[error("sqlx error")]
    SqlxError {
        #[from]
        #[source]
        error: sqlx::Error,
    },

    #[error("model error: {}", .reason)]
    ModelError { reason: Cow<'static, str> },

    #[error("database inconsistency: {}", .problem)]
    DatabaseInconsistencyError { problem: Cow<'static, str> },
}

impl QueryError {
    pub fn model_error<R>(reason: R) -> Self
    where
        R: Into<Cow<'static, str>>,
    {
        Self::ModelError {
            reason: reason.into(),
        }
    }

    pub fn database_inconsistency<R>(problem: R) -> Self
    where
        R: Into<Cow<'static, str>>,
    {
        Self::DatabaseInconsistencyError {
            problem: problem.into(),
        }
    }
}



pub type QueryResult<R, E = QueryError> = Result<R, E>;


pub trait TryIntoExternalModel {
    type ExternalModel;
    type Error;

    fn try_into_external_model(self) -> Result<Self::ExternalModel, Self::Error>;
}



/// Creates the schema and the vocab entry table if they are missing.
///
/// Run once at startup; every statement is idempotent.
pub async fn initialize_schema(database_pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("CREATE SCHEMA IF NOT EXISTS wordstash")
        .execute(database_pool)
        .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS wordstash.vocab_entry ( \
            id UUID PRIMARY KEY, \
            content TEXT NOT NULL, \
            date_group DATE NOT NULL, \
            pos TEXT, \
            translation TEXT, \
            ai_analysis JSONB, \
            created_at TIMESTAMP WITH TIME ZONE NOT NULL \
        )",
    )
    .execute(database_pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS vocab_entry_date_group_index \
            ON wordstash.vocab_entry (date_group DESC, created_at DESC)",
    )
    .execute(database_pool)
    .await?;

    debug!("Database schema is up to date.");

    Ok(())
}
