pub mod note_generator;
pub mod transcript_fetcher;
