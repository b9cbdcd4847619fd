/// Builds the fixed analysis prompt for a single entry's text.
///
/// The model is instructed to reply with nothing but a JSON object carrying
/// the `pos`, `cn`, `etymology`, `sentences` and `tips` keys; in practice
/// replies still arrive wrapped in prose or code fences, which the
/// extraction step tolerates.
pub fn build_analysis_prompt(content: &str) -> String {
    format!(
        "作为英语专家，分析文本：{content}。\n\
         返回 JSON 格式（不要包含任何其他文字），包含：\n\
         {{\n\
         \x20 \"pos\": \"词性\",\n\
         \x20 \"cn\": \"中文释义\",\n\
         \x20 \"etymology\": \"词源/词根分析\",\n\
         \x20 \"sentences\": [\"例句1\", \"例句2\"],\n\
         \x20 \"tips\": \"记忆技巧\"\n\
         }}"
    )
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn prompt_embeds_the_entry_content() {
        let prompt = build_analysis_prompt("serendipity");

        assert!(prompt.contains("serendipity"));
    }

    #[test]
    fn prompt_names_every_required_key() {
        let prompt = build_analysis_prompt("ephemeral");

        for key in ["pos", "cn", "etymology", "sentences", "tips"] {
            assert!(
                prompt.contains(&format!("\"{key}\"")),
                "prompt is missing the {key} key"
            );
        }
    }
}
