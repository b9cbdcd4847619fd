//! Endpoints for the vocabulary entry resource: batch capture, the
//! date-grouped listing, single-entry lookup, AI analysis and deletion.

use actix_web::{delete, get, post, web, Scope};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use wordstash_core::analysis::VocabAnalysis;
use wordstash_core::grouping::group_by_date;
use wordstash_core::id::VocabEntryId;
use wordstash_database::entities::{
    NewVocabEntry,
    VocabEntryModel,
    VocabEntryMutation,
    VocabEntryQuery,
};

use crate::api::errors::{
    EndpointError,
    EndpointResponseBuilder,
    EndpointResult,
    VocabErrorReason,
};
use crate::api::traits::IntoApiModel;
use crate::state::ApplicationState;


/// Maximum accepted length of an entry's content, in characters.
pub const CONTENT_MAXIMUM_LENGTH: usize = 500;


#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VocabEntry {
    /// Entry UUID.
    pub id: VocabEntryId,

    /// The captured word or phrase, verbatim.
    pub content: String,

    /// Part of speech; set once analysis succeeds.
    pub pos: Option<String>,

    /// Chinese translation; set once analysis succeeds.
    pub translation: Option<String>,

    /// The full structured analysis; either absent or complete.
    pub ai_analysis: Option<VocabAnalysis>,

    /// When the entry was created.
    pub created_at: DateTime<Utc>,

    /// Calendar-day bucket used for display grouping.
    pub date_group: NaiveDate,
}

impl IntoApiModel for VocabEntryModel {
    type ApiModel = VocabEntry;

    fn into_api_model(self) -> Self::ApiModel {
        Self::ApiModel {
            id: self.id,
            content: self.content,
            pos: self.pos,
            translation: self.translation,
            ai_analysis: self.ai_analysis,
            created_at: self.created_at,
            date_group: self.date_group,
        }
    }
}


#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct VocabEntryCreationRequest {
    pub content: String,
}


fn validate_content(content: &str) -> Result<(), VocabErrorReason> {
    let content_length = content.chars().count();

    if content_length == 0 || content_length > CONTENT_MAXIMUM_LENGTH {
        return Err(VocabErrorReason::content_outside_length_bounds());
    }

    Ok(())
}

fn parse_entry_id(value: &str) -> Result<VocabEntryId, EndpointError> {
    value
        .parse()
        .map_err(|error| EndpointError::InvalidUuidFormat { error })
}



/// Create a vocab entry
///
/// Validates the content length (1 to 500 characters), captures today's
/// date as the entry's display group and persists the entry.
#[post("/create")]
pub async fn create_vocab_entry(
    state: ApplicationState,
    request_data: web::Json<VocabEntryCreationRequest>,
) -> EndpointResult {
    let content = request_data.into_inner().content;

    if let Err(reason) = validate_content(&content) {
        return EndpointResponseBuilder::bad_request()
            .with_error_reason(reason)
            .build();
    }


    let mut database_connection = state.acquire_database_connection().await?;

    let newly_created_entry =
        VocabEntryMutation::create(&mut database_connection, NewVocabEntry { content }).await?;

    info!(
        entry_id = %newly_created_entry.id,
        "Created a new vocab entry."
    );

    EndpointResponseBuilder::ok()
        .with_json_body(newly_created_entry.into_api_model())
        .build()
}


/// List all vocab entries, grouped by date
///
/// Groups are ordered most-recent-date first; entries within a group are
/// ordered by creation time descending. An empty store yields `{}`.
#[get("/list")]
pub async fn list_vocab_entries(state: ApplicationState) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;

    let entries = VocabEntryQuery::get_all_ordered(&mut database_connection).await?;

    let grouped_entries = group_by_date(
        entries.into_iter().map(IntoApiModel::into_api_model),
        |entry: &VocabEntry| entry.date_group,
    );

    EndpointResponseBuilder::ok()
        .with_json_body(grouped_entries)
        .build()
}


/// Get a single vocab entry
#[get("/{entry_id}")]
pub async fn get_vocab_entry_by_id(
    state: ApplicationState,
    parameters: web::Path<(String,)>,
) -> EndpointResult {
    let target_entry_id = parse_entry_id(&parameters.into_inner().0)?;

    let mut database_connection = state.acquire_database_connection().await?;

    let potential_entry =
        VocabEntryQuery::get_by_id(&mut database_connection, target_entry_id).await?;

    let Some(entry) = potential_entry else {
        return EndpointResponseBuilder::not_found()
            .with_error_reason(VocabErrorReason::entry_not_found())
            .build();
    };

    EndpointResponseBuilder::ok()
        .with_json_body(entry.into_api_model())
        .build()
}


/// Run AI analysis for a vocab entry
///
/// Sends the entry's content to the external completion endpoint and, on a
/// successful parse, persists the structured result onto the entry,
/// overwriting any previous analysis. The entry is left untouched when any
/// part of the call or parsing fails.
///
/// Two concurrent analyze calls for the same entry race; the last write wins.
#[post("/analyze/{entry_id}")]
pub async fn analyze_vocab_entry(
    state: ApplicationState,
    parameters: web::Path<(String,)>,
) -> EndpointResult {
    let target_entry_id = parse_entry_id(&parameters.into_inner().0)?;

    // The pooled connection must not be held across the external
    // completion call below, which can take up to the configured request
    // timeout; it is scoped to the lookup and reacquired for the update.
    let entry_content = {
        let mut database_connection = state.acquire_database_connection().await?;

        let potential_entry =
            VocabEntryQuery::get_by_id(&mut database_connection, target_entry_id).await?;

        let Some(entry) = potential_entry else {
            return EndpointResponseBuilder::not_found()
                .with_error_reason(VocabErrorReason::entry_not_found())
                .build();
        };

        entry.content
    };


    let analysis = match state.analyzer.analyze(&entry_content).await {
        Ok(analysis) => analysis,
        Err(analysis_error) => {
            warn!(
                entry_id = %target_entry_id,
                error = %analysis_error,
                "AI analysis failed."
            );

            return EndpointResponseBuilder::bad_request()
                .with_error_reason(format!("AI analysis failed: {analysis_error}"))
                .build();
        }
    };


    let mut database_connection = state.acquire_database_connection().await?;

    let potential_updated_entry = VocabEntryMutation::store_analysis(
        &mut database_connection,
        target_entry_id,
        &analysis,
    )
    .await?;

    let Some(updated_entry) = potential_updated_entry else {
        // The entry was deleted between the lookup and the update.
        return EndpointResponseBuilder::not_found()
            .with_error_reason(VocabErrorReason::entry_not_found())
            .build();
    };

    info!(
        entry_id = %target_entry_id,
        "Stored AI analysis for a vocab entry."
    );

    EndpointResponseBuilder::ok()
        .with_json_body(updated_entry.into_api_model())
        .build()
}


/// Delete a vocab entry
///
/// The deletion is permanent; there is no soft delete.
#[delete("/{entry_id}")]
pub async fn delete_vocab_entry(
    state: ApplicationState,
    parameters: web::Path<(String,)>,
) -> EndpointResult {
    let target_entry_id = parse_entry_id(&parameters.into_inner().0)?;

    let mut database_connection = state.acquire_database_connection().await?;

    let deleted_successfully =
        VocabEntryMutation::delete(&mut database_connection, target_entry_id).await?;

    if !deleted_successfully {
        return EndpointResponseBuilder::not_found()
            .with_error_reason(VocabErrorReason::entry_not_found())
            .build();
    }

    info!(
        entry_id = %target_entry_id,
        "Deleted a vocab entry."
    );

    EndpointResponseBuilder::ok().with_json_body(()).build()
}



/// Router for all vocab entry endpoints.
/// Lives under the `/vocab` path.
///
/// The fixed-path routes must be registered before the `/{entry_id}`
/// catch-alls so that `create`, `list` and `analyze` are not swallowed
/// by the parameterized matchers.
#[rustfmt::skip]
pub fn vocab_router() -> Scope {
    web::scope("/vocab")
        .service(create_vocab_entry)
        .service(list_vocab_entries)
        .service(analyze_vocab_entry)
        .service(get_vocab_entry_by_id)
        .service(delete_vocab_entry)
}



#[cfg(test)]
mod test {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn content_of_maximum_length_is_accepted() {
        let content = "a".repeat(CONTENT_MAXIMUM_LENGTH);

        assert!(validate_content(&content).is_ok());
    }

    #[test]
    fn content_over_maximum_length_is_rejected() {
        let content = "a".repeat(CONTENT_MAXIMUM_LENGTH + 1);

        assert_eq!(
            validate_content(&content),
            Err(VocabErrorReason::content_outside_length_bounds())
        );
    }

    #[test]
    fn empty_content_is_rejected() {
        assert_eq!(
            validate_content(""),
            Err(VocabErrorReason::content_outside_length_bounds())
        );
    }

    #[test]
    fn length_bounds_count_characters_not_bytes() {
        // 500 CJK characters are three bytes each in UTF-8.
        let content = "词".repeat(CONTENT_MAXIMUM_LENGTH);

        assert!(validate_content(&content).is_ok());
    }

    #[test]
    fn api_model_serializes_with_camel_case_field_names() {
        let entry = VocabEntry {
            id: "018dbe00266e7398abd20906df0aa345".parse().unwrap(),
            content: "serendipity".to_string(),
            pos: None,
            translation: None,
            ai_analysis: None,
            created_at: Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap(),
            date_group: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
        };

        let serialized = serde_json::to_value(&entry).unwrap();

        assert_eq!(
            serialized,
            json!({
                "id": "018dbe00266e7398abd20906df0aa345",
                "content": "serendipity",
                "pos": null,
                "translation": null,
                "aiAnalysis": null,
                "createdAt": "2026-08-30T12:00:00Z",
                "dateGroup": "2026-08-30"
            })
        );
    }
}
