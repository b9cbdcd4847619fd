//! Normalization of the completion endpoint's reply into plain assistant text.
//!
//! The endpoint has been observed to answer in several nested shapes;
//! each known shape gets its own matcher, they are tried in order,
//! and the first one that matches wins.

use serde_json::Value;

use crate::errors::AnalysisError;


type ShapeMatcher = fn(&Value) -> Option<&str>;

/// Known reply shapes, most common first.
const SHAPE_MATCHERS: [ShapeMatcher; 3] = [
    match_chat_completions_shape,
    match_wrapped_chat_completions_shape,
    match_flat_content_shape,
];


/// Pulls the assistant text out of a completion reply,
/// trying each known shape in order.
pub fn extract_assistant_text(response: &Value) -> Result<&str, AnalysisError> {
    for matcher in SHAPE_MATCHERS {
        if let Some(text) = matcher(response) {
            return Ok(text);
        }
    }

    Err(AnalysisError::UnexpectedResponseFormat)
}


/// `choices[0].message.content` (OpenAI-style chat completions).
fn match_chat_completions_shape(response: &Value) -> Option<&str> {
    response
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
}

/// The chat-completions shape nested one level deeper under `data`.
fn match_wrapped_chat_completions_shape(response: &Value) -> Option<&str> {
    match_chat_completions_shape(response.get("data")?)
}

/// A flat `content` field at the top level.
fn match_flat_content_shape(response: &Value) -> Option<&str> {
    response.get("content")?.as_str()
}



#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn matches_chat_completions_shape() {
        let response = json!({
            "choices": [{ "message": { "role": "assistant", "content": "hello" } }]
        });

        assert_eq!(extract_assistant_text(&response).unwrap(), "hello");
    }

    #[test]
    fn matches_wrapped_chat_completions_shape() {
        let response = json!({
            "data": {
                "choices": [{ "message": { "content": "wrapped" } }]
            }
        });

        assert_eq!(extract_assistant_text(&response).unwrap(), "wrapped");
    }

    #[test]
    fn matches_flat_content_shape() {
        let response = json!({ "content": "flat" });

        assert_eq!(extract_assistant_text(&response).unwrap(), "flat");
    }

    #[test]
    fn prefers_the_chat_completions_shape_when_several_match() {
        let response = json!({
            "choices": [{ "message": { "content": "from choices" } }],
            "content": "from flat field"
        });

        assert_eq!(
            extract_assistant_text(&response).unwrap(),
            "from choices"
        );
    }

    #[test]
    fn fails_on_an_unrecognized_shape() {
        let response = json!({ "result": "something else entirely" });

        let error = extract_assistant_text(&response).unwrap_err();
        assert!(matches!(
            error,
            AnalysisError::UnexpectedResponseFormat
        ));
    }

    #[test]
    fn fails_when_content_is_not_a_string() {
        let response = json!({
            "choices": [{ "message": { "content": 42 } }]
        });

        assert!(extract_assistant_text(&response).is_err());
    }
}
