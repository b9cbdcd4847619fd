use tracing::debug;
use wordstash_core::analysis::VocabAnalysis;

use crate::client::CompletionClient;
use crate::errors::AnalysisError;
use crate::extract::extract_first_json_object;
use crate::prompt::build_analysis_prompt;
use crate::response::extract_assistant_text;


/// Runs the full analysis pipeline for a single entry's text:
/// prompt construction, the completion call, reply-shape normalization,
/// JSON extraction and deserialization into a [`VocabAnalysis`].
///
/// The client is an injected dependency; the analyzer itself holds no
/// other state and never caches, so re-running an analysis always
/// re-queries the model.
pub struct Analyzer {
    client: Box<dyn CompletionClient>,
}

impl Analyzer {
    pub fn new(client: Box<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn analyze(&self, content: &str) -> Result<VocabAnalysis, AnalysisError> {
        let prompt = build_analysis_prompt(content);

        let response = self.client.complete(&prompt).await?;

        let assistant_text = extract_assistant_text(&response)?;
        debug!(
            reply_length = assistant_text.len(),
            "Received completion reply."
        );

        let json_span = extract_first_json_object(assistant_text)
            .ok_or(AnalysisError::NoJsonObjectInReply)?;

        serde_json::from_str::<VocabAnalysis>(json_span)
            .map_err(|error| AnalysisError::InvalidAnalysisPayload { error })
    }
}



#[cfg(test)]
mod test {
    use std::sync::Mutex;

    use serde_json::{json, Value};

    use super::*;

    struct CannedCompletionClient {
        replies: Mutex<Vec<Value>>,
    }

    impl CannedCompletionClient {
        fn single(reply: Value) -> Self {
            Self {
                replies: Mutex::new(vec![reply]),
            }
        }

        fn sequence(replies: Vec<Value>) -> Self {
            Self {
                replies: Mutex::new(replies),
            }
        }
    }

    #[async_trait::async_trait]
    impl CompletionClient for CannedCompletionClient {
        async fn complete(&self, _prompt: &str) -> Result<Value, AnalysisError> {
            let mut replies = self.replies.lock().unwrap();
            Ok(replies.remove(0))
        }
    }

    fn fenced_reply(payload: &str) -> Value {
        json!({
            "choices": [{
                "message": { "content": format!("```json\n{payload}\n```") }
            }]
        })
    }

    #[tokio::test]
    async fn analyzes_a_code_fenced_chat_completion_reply() {
        let reply = fenced_reply(
            "{\"pos\":\"n.\",\"cn\":\"测试\",\"etymology\":\"e\",\"sentences\":[\"a|b\"],\"tips\":\"t\"}",
        );
        let analyzer = Analyzer::new(Box::new(CannedCompletionClient::single(reply)));

        let analysis = analyzer.analyze("test").await.unwrap();

        assert_eq!(analysis.pos, "n.");
        assert_eq!(analysis.cn, "测试");
        assert_eq!(analysis.etymology, "e");
        assert_eq!(analysis.sentences, vec!["a|b".to_string()]);
        assert_eq!(analysis.tips, "t");
    }

    #[tokio::test]
    async fn reply_without_a_json_object_fails() {
        let reply = json!({
            "choices": [{ "message": { "content": "I cannot help with that." } }]
        });
        let analyzer = Analyzer::new(Box::new(CannedCompletionClient::single(reply)));

        let error = analyzer.analyze("test").await.unwrap_err();

        assert!(matches!(error, AnalysisError::NoJsonObjectInReply));
        assert!(error.to_string().contains("invalid AI response"));
    }

    #[tokio::test]
    async fn reply_with_an_incomplete_payload_fails() {
        let reply = fenced_reply("{\"pos\":\"n.\",\"cn\":\"只有一半\"}");
        let analyzer = Analyzer::new(Box::new(CannedCompletionClient::single(reply)));

        let error = analyzer.analyze("test").await.unwrap_err();

        assert!(matches!(
            error,
            AnalysisError::InvalidAnalysisPayload { .. }
        ));
    }

    #[tokio::test]
    async fn reply_in_an_unknown_shape_fails() {
        let reply = json!({ "unexpected": true });
        let analyzer = Analyzer::new(Box::new(CannedCompletionClient::single(reply)));

        let error = analyzer.analyze("test").await.unwrap_err();

        assert!(matches!(
            error,
            AnalysisError::UnexpectedResponseFormat
        ));
    }

    #[tokio::test]
    async fn re_analysis_re_queries_the_model_instead_of_caching() {
        let analyzer = Analyzer::new(Box::new(CannedCompletionClient::sequence(vec![
            fenced_reply(
                "{\"pos\":\"n.\",\"cn\":\"第一\",\"etymology\":\"e\",\"sentences\":[],\"tips\":\"t\"}",
            ),
            fenced_reply(
                "{\"pos\":\"v.\",\"cn\":\"第二\",\"etymology\":\"e\",\"sentences\":[],\"tips\":\"t\"}",
            ),
        ])));

        let first = analyzer.analyze("test").await.unwrap();
        let second = analyzer.analyze("test").await.unwrap();

        assert_eq!(first.cn, "第一");
        assert_eq!(second.cn, "第二");
        assert_ne!(first, second);
    }
}
