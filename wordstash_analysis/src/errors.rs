use thiserror::Error;


#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No API credential was available when a completion call was attempted.
    /// The server starts without one, but every analyze call fails until it is set.
    #[error("no API credential is configured for the completion endpoint")]
    MissingApiCredential,

    #[error("completion request failed")]
    RequestFailed {
        #[from]
        #[source]
        error: reqwest::Error,
    },

    #[error("unexpected response format from the completion endpoint")]
    UnexpectedResponseFormat,

    #[error("invalid AI response: no JSON object in the reply")]
    NoJsonObjectInReply,

    #[error("invalid AI response: embedded JSON does not describe an analysis")]
    InvalidAnalysisPayload {
        #[source]
        error: serde_json::Error,
    },
}
