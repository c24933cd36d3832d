use std::{fmt::Display, future::Future};

/// Instruction prepended verbatim to every transcript.
pub const NOTES_PROMPT: &str = include_str!("./prompts/notes.txt");

pub trait NoteGenerator {
    type Error: Display;

    /// Sends `prompt` to the model and returns the raw generated text.
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

/// Builds the full model input for an assembled transcript.
pub fn build_prompt(transcript: &str) -> String {
    format!("{NOTES_PROMPT}{transcript}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_prepended_without_separator() {
        let prompt = build_prompt("Hello world");
        assert!(prompt.starts_with("Read the full transcript below"));
        assert!(prompt.ends_with("\n\nTranscript:\nHello world"));
        assert_eq!(prompt.strip_prefix(NOTES_PROMPT), Some("Hello world"));
    }

    #[test]
    fn test_prompt_keeps_typographic_apostrophe() {
        assert!(NOTES_PROMPT.contains("the video\u{2019}s content."));
    }
}
