/// Soft cap requested from the model; not enforced on the reply.
pub const MAX_SUMMARY_WORDS: usize = 30;

/// Marker separating the instruction from the embedded document text.
pub const DELIMITER: &str = "```";

/// Builds the summarization instruction for one document. Deterministic:
/// the same text always yields the same prompt.
///
/// Any occurrence of the delimiter inside the text is rewritten to `'''`
/// so the model never sees a premature closing marker.
pub fn build_prompt(text: &str) -> String {
    let sanitized = text.replace(DELIMITER, "'''");
    format!(
        "Your task is to produce a short summary of the document below.\n\
         Summarize the text between the triple backticks in at most {MAX_SUMMARY_WORDS} words.\n\
         {DELIMITER}{sanitized}{DELIMITER}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_sits_between_delimiters() {
        let text = "First paragraph.\nSecond paragraph.";
        let prompt = build_prompt(text);

        let open = prompt.find(DELIMITER).unwrap();
        let close = prompt.rfind(DELIMITER).unwrap();
        assert_eq!(&prompt[open + DELIMITER.len()..close], text);
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_prompt("same text"), build_prompt("same text"));
    }

    #[test]
    fn test_mentions_word_cap() {
        assert!(build_prompt("x").contains(&MAX_SUMMARY_WORDS.to_string()));
    }

    #[test]
    fn test_delimiter_collision_is_sanitized() {
        let prompt = build_prompt("before ``` after");
        let open = prompt.find(DELIMITER).unwrap();
        let close = prompt.rfind(DELIMITER).unwrap();
        assert_eq!(&prompt[open + DELIMITER.len()..close], "before ''' after");
    }
}
