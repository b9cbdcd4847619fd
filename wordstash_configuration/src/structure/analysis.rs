use std::env;
use std::time::Duration;

use miette::Result;
use serde::Deserialize;

use crate::traits::ResolvableConfiguration;


/// Environment variable consulted for the completion endpoint credential
/// when the configuration file does not carry one.
pub const ANALYSIS_API_KEY_ENVIRONMENT_VARIABLE: &str = "WORDSTASH_ANALYSIS_API_KEY";

fn default_request_timeout_seconds() -> u64 {
    60
}


#[derive(Deserialize, Clone, Debug)]
pub(super) struct UnresolvedAnalysisConfiguration {
    endpoint_url: String,

    model: String,

    api_key: Option<String>,

    #[serde(default = "default_request_timeout_seconds")]
    request_timeout_seconds: u64,
}

/// Configuration for the external completion endpoint used for AI analysis.
#[derive(Clone, Debug)]
pub struct AnalysisConfiguration {
    /// Full URL of the chat-completions endpoint.
    pub endpoint_url: String,

    /// Model name sent with every completion request.
    pub model: String,

    /// Credential for the endpoint. A missing credential is not fatal
    /// at startup; analyze calls fail until one is provided.
    pub api_key: Option<String>,

    pub request_timeout: Duration,
}

impl ResolvableConfiguration for UnresolvedAnalysisConfiguration {
    type Resolved = AnalysisConfiguration;

    fn resolve(self) -> Result<Self::Resolved> {
        // The configuration file takes precedence over the environment.
        let api_key = self
            .api_key
            .or_else(|| env::var(ANALYSIS_API_KEY_ENVIRONMENT_VARIABLE).ok())
            .filter(|key| !key.is_empty());

        Ok(Self::Resolved {
            endpoint_url: self.endpoint_url,
            model: self.model,
            api_key,
            request_timeout: Duration::from_secs(self.request_timeout_seconds),
        })
    }
}
