pub mod gemini;
pub mod note_generator;
