use std::sync::{Arc, Mutex};
use yt_notes::NoteGenerator;

/// Replays one canned reply and keeps every prompt it was handed.
#[derive(Clone)]
pub struct ScriptedNoteGenerator {
    reply: Result<String, String>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedNoteGenerator {
    pub fn replying(notes: &str) -> Self {
        Self::with_reply(Ok(notes.to_string()))
    }

    pub fn erroring(message: &str) -> Self {
        Self::with_reply(Err(message.to_string()))
    }

    fn with_reply(reply: Result<String, String>) -> Self {
        Self {
            reply,
            prompts: Arc::default(),
        }
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl NoteGenerator for ScriptedNoteGenerator {
    type Error = String;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.prompts.lock().unwrap().push(prompt.to_owned());
        self.reply.clone()
    }
}
