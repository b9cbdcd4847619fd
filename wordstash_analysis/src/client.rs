use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::errors::AnalysisError;


/// A single-shot completion backend.
///
/// The production implementation talks to a chat-completions HTTP endpoint;
/// tests substitute a canned implementation so the rest of the analysis
/// pipeline can be exercised without a network.
#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends `prompt` as a single user-role, non-streaming message and
    /// returns the raw JSON reply without interpreting its shape.
    async fn complete(&self, prompt: &str) -> Result<Value, AnalysisError>;
}


#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}


/// `reqwest`-backed client for an OpenAI-style chat-completions endpoint.
pub struct ChatCompletionsClient {
    endpoint_url: String,
    model: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl ChatCompletionsClient {
    pub fn new(
        endpoint_url: String,
        model: String,
        api_key: Option<String>,
        request_timeout: Duration,
    ) -> Result<Self, AnalysisError> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;

        Ok(Self {
            endpoint_url,
            model,
            api_key,
            client,
        })
    }
}

#[async_trait::async_trait]
impl CompletionClient for ChatCompletionsClient {
    async fn complete(&self, prompt: &str) -> Result<Value, AnalysisError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(AnalysisError::MissingApiCredential);
        };

        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            stream: false,
        };

        let response = self
            .client
            .post(&self.endpoint_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<Value>().await?)
    }
}



#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn completion_without_a_credential_fails_before_any_request() {
        let client = ChatCompletionsClient::new(
            "http://localhost:1/v4/chat/completions".to_string(),
            "glm-4".to_string(),
            None,
            Duration::from_secs(1),
        )
        .unwrap();

        let error = client.complete("anything").await.unwrap_err();

        assert!(matches!(
            error,
            AnalysisError::MissingApiCredential
        ));
    }
}
