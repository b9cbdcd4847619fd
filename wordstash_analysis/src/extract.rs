//! Best-effort extraction of a JSON object embedded in free-form model text.
//!
//! The model is asked for bare JSON but routinely wraps its reply in prose or
//! markdown code fences. This scans for the first `{` and walks forward until
//! the braces balance, ignoring braces that occur inside JSON string literals.
//! It is a heuristic, not a parser; the actual validation happens when the
//! span is deserialized afterwards.


/// Returns the first balanced `{...}` span in `text`, if any.
pub fn extract_first_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut inside_string = false;
    let mut escaped = false;

    for (offset, character) in text[start..].char_indices() {
        if inside_string {
            if escaped {
                escaped = false;
            } else if character == '\\' {
                escaped = true;
            } else if character == '"' {
                inside_string = false;
            }

            continue;
        }

        match character {
            '"' => inside_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;

                if depth == 0 {
                    let end = start + offset + character.len_utf8();
                    return Some(&text[start..end]);
                }
            }
            _ => {}
        }
    }

    None
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn extracts_a_bare_object() {
        assert_eq!(
            extract_first_json_object("{\"pos\": \"n.\"}"),
            Some("{\"pos\": \"n.\"}")
        );
    }

    #[test]
    fn extracts_from_a_markdown_code_fence() {
        let text = "```json\n{\"pos\": \"n.\", \"cn\": \"测试\"}\n```";

        assert_eq!(
            extract_first_json_object(text),
            Some("{\"pos\": \"n.\", \"cn\": \"测试\"}")
        );
    }

    #[test]
    fn extracts_from_surrounding_prose() {
        let text = "Sure! Here is the analysis: {\"tips\": \"t\"} Hope this helps.";

        assert_eq!(
            extract_first_json_object(text),
            Some("{\"tips\": \"t\"}")
        );
    }

    #[test]
    fn handles_nested_objects() {
        let text = "reply: {\"outer\": {\"inner\": 1}} trailing";

        assert_eq!(
            extract_first_json_object(text),
            Some("{\"outer\": {\"inner\": 1}}")
        );
    }

    #[test]
    fn ignores_braces_inside_string_values() {
        let text = "{\"tips\": \"remember the } brace\", \"pos\": \"n.\"}";

        assert_eq!(extract_first_json_object(text), Some(text));
    }

    #[test]
    fn ignores_escaped_quotes_inside_string_values() {
        let text = "{\"tips\": \"a \\\"quoted\\\" } brace\"}";

        assert_eq!(extract_first_json_object(text), Some(text));
    }

    #[test]
    fn returns_none_when_there_is_no_object() {
        assert_eq!(
            extract_first_json_object("I could not analyze that."),
            None
        );
    }

    #[test]
    fn returns_none_when_the_object_never_closes() {
        assert_eq!(
            extract_first_json_object("{\"pos\": \"n.\""),
            None
        );
    }
}
