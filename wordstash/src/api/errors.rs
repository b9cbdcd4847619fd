//! Provides ways of handling errors in API endpoint functions
//! and ways to have those errors automatically turned into correct
//! HTTP error responses when returned as `Err(error)` from those functions.
//!
//! Every response body, success or error, is wrapped in the
//! `{code, data, msg}` envelope the frontend expects.

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

use actix_http::header::{HeaderName, HeaderValue};
use actix_web::body::{BoxBody, MessageBody};
use actix_web::http::{header, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use wordstash_database::QueryError;


/// Pertains to all endpoints under `/vocab`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum VocabErrorReason {
    EntryNotFound,

    ContentOutsideLengthBounds,
}

impl VocabErrorReason {
    pub const fn entry_not_found() -> Self {
        Self::EntryNotFound
    }

    pub const fn content_outside_length_bounds() -> Self {
        Self::ContentOutsideLengthBounds
    }
}

impl Display for VocabErrorReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EntryNotFound => write!(f, "vocab entry not found"),
            Self::ContentOutsideLengthBounds => {
                write!(f, "content must be between 1 and 500 characters long")
            }
        }
    }
}



/// The `{code, data, msg}` response envelope.
///
/// `code` mirrors the HTTP status code, `msg` is `"success"` or a
/// descriptive error message, and `data` carries the payload
/// (serialized as `null` when there is none).
#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
pub struct ResponseEnvelope<D> {
    pub code: u16,

    pub data: Option<D>,

    pub msg: Cow<'static, str>,
}



/// General-purpose Wordstash API error type.
///
/// Use this alongside an [`EndpointResult`] return type in actix endpoint
/// handlers to `?`-return errors and have them automatically converted
/// into enveloped HTTP 4xx and 5xx responses.
#[derive(Debug, Error)]
pub enum EndpointError {
    /*
     * Client errors.
     */
    InvalidUuidFormat {
        #[source]
        error: uuid::Error,
    },

    /*
     * Server errors.
     *
     * Reasons are not shown externally.
     */
    /// Internal error with a string reason.
    /// Triggers a `500 Internal Server Error` (**reason doesn't leak through the API**).
    InternalErrorWithReason {
        reason: Cow<'static, str>,
    },

    /// Internal error, constructed from a boxed [`Error`][std::error::Error].
    /// Triggers a `500 Internal Server Error` (**error doesn't leak through the API**).
    InternalGenericError {
        #[from]
        #[source]
        error: Box<dyn std::error::Error>,
    },

    /// Internal error, constructed from a [`sqlx::Error`].
    /// Triggers a `500 Internal Server Error` (*doesn't leak the error through the API*).
    InternalDatabaseError {
        #[from]
        #[source]
        error: sqlx::Error,
    },
}

impl EndpointError {
    pub fn internal_error<E>(error: E) -> Self
    where
        E: std::error::Error + 'static,
    {
        Self::InternalGenericError {
            error: Box::new(error),
        }
    }

    /// Initialize a new internal API error using an internal reason string.
    /// When constructing an HTTP response using this error variant, the **reason
    /// is not leaked through the API.**
    #[inline]
    pub fn internal_error_with_reason<S>(reason: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::InternalErrorWithReason {
            reason: reason.into(),
        }
    }
}

impl Display for EndpointError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUuidFormat { error } => {
                write!(f, "Invalid UUID format: {}.", error)
            }
            Self::InternalErrorWithReason { reason } => write!(
                f,
                "Internal server error (with reason): {reason}."
            ),
            Self::InternalGenericError { error } => {
                write!(f, "Internal server error (generic): {error:?}")
            }
            Self::InternalDatabaseError { error } => {
                write!(
                    f,
                    "Internal server error (database error): {error}."
                )
            }
        }
    }
}

impl ResponseError for EndpointError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidUuidFormat { .. } => StatusCode::BAD_REQUEST,
            Self::InternalErrorWithReason { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InternalGenericError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InternalDatabaseError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let fallibly_built_response = match self {
            Self::InvalidUuidFormat { .. } => EndpointResponseBuilder::bad_request()
                .with_error_reason("invalid UUID format")
                .build(),
            Self::InternalErrorWithReason { reason } => {
                error!(%reason, "Internal error while handling a request.");

                EndpointResponseBuilder::internal_server_error()
                    .with_error_reason("internal server error")
                    .build()
            }
            Self::InternalGenericError { error } => {
                error!(?error, "Internal error while handling a request.");

                EndpointResponseBuilder::internal_server_error()
                    .with_error_reason("internal server error")
                    .build()
            }
            Self::InternalDatabaseError { error } => {
                error!(%error, "Database error while handling a request.");

                EndpointResponseBuilder::internal_server_error()
                    .with_error_reason("internal server error")
                    .build()
            }
        };


        fallibly_built_response.unwrap_or_else(|_| HttpResponse::InternalServerError().finish())
    }
}


impl From<QueryError> for EndpointError {
    fn from(value: QueryError) -> Self {
        match value {
            QueryError::SqlxError { error } => Self::InternalDatabaseError { error },
            QueryError::ModelError { reason } => Self::internal_error_with_reason(reason),
            QueryError::DatabaseInconsistencyError { problem } => {
                Self::internal_error_with_reason(problem)
            }
        }
    }
}



pub struct EndpointResponseBuilder {
    status_code: StatusCode,

    body: Option<Result<Vec<u8>, serde_json::Error>>,

    additional_headers: Vec<(HeaderName, HeaderValue)>,
}

impl EndpointResponseBuilder {
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            body: None,
            additional_headers: Vec::with_capacity(1),
        }
    }

    #[inline]
    pub fn ok() -> Self {
        Self::new(StatusCode::OK)
    }

    #[inline]
    pub fn bad_request() -> Self {
        Self::new(StatusCode::BAD_REQUEST)
    }

    #[inline]
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND)
    }

    #[inline]
    pub fn internal_server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Wraps `data` in a success envelope and uses it as the response body.
    pub fn with_json_body<S>(mut self, data: S) -> Self
    where
        S: Serialize,
    {
        let envelope = ResponseEnvelope {
            code: self.status_code.as_u16(),
            data: Some(data),
            msg: Cow::Borrowed("success"),
        };

        let body = serde_json::to_vec(&envelope);

        self.additional_headers.push((
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
        ));

        Self {
            status_code: self.status_code,
            body: Some(body),
            additional_headers: self.additional_headers,
        }
    }

    /// Wraps `reason` in an error envelope (`data` is `null`) and uses it
    /// as the response body.
    pub fn with_error_reason<R>(mut self, reason: R) -> Self
    where
        R: Display,
    {
        let envelope = ResponseEnvelope::<()> {
            code: self.status_code.as_u16(),
            data: None,
            msg: Cow::Owned(reason.to_string()),
        };

        let body = serde_json::to_vec(&envelope);

        self.additional_headers.push((
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
        ));

        Self {
            status_code: self.status_code,
            body: Some(body),
            additional_headers: self.additional_headers,
        }
    }

    pub fn build(self) -> Result<HttpResponse<BoxBody>, EndpointError> {
        let optional_body = match self.body {
            Some(body_or_error) => match body_or_error {
                Ok(body) => Some(body),
                Err(serialization_error) => {
                    return Err(EndpointError::internal_error(serialization_error))
                }
            },
            None => None,
        };


        let mut response_builder = HttpResponse::build(self.status_code);

        for (header_name, header_value) in self.additional_headers {
            response_builder.insert_header((header_name, header_value));
        }


        match optional_body {
            Some(body) => response_builder
                .message_body(body.boxed())
                // This will, however, never produce an error (`type Error = Infallible`),
                // see <https://docs.rs/actix-web/4.9.0/actix_web/body/trait.MessageBody.html#impl-MessageBody-for-Vec%3Cu8%3E>.
                .map_err(EndpointError::internal_error),
            None => response_builder
                .message_body(().boxed())
                // This will, however, never produce an error (`type Error = Infallible`),
                // see <https://docs.rs/actix-web/4.9.0/actix_web/body/trait.MessageBody.html#impl-MessageBody-for-()>.
                .map_err(EndpointError::internal_error),
        }
    }
}




/// Short for [`Result`]`<`[`HttpResponse`]`, `[`EndpointError`]`>`, intended
/// to be used in most handlers of the Wordstash API.
pub type EndpointResult<Body = BoxBody> = Result<HttpResponse<Body>, EndpointError>;
