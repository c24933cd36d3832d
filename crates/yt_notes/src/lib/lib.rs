mod error;
mod llm;
pub mod parser;
mod processor;
pub mod server;
pub mod tracing;
pub mod yt;

pub use error::Error;
pub use llm::gemini;
pub use llm::note_generator::{build_prompt, NoteGenerator, NOTES_PROMPT};
pub use processor::{
    assemble_transcript, builder::NotesProcessorBuilder, NotesProcessor, NotesResult,
};
pub use yt::{TranscriptError, TranscriptFetcher, TranscriptSegment};
