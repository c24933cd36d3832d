use crate::{yt::TranscriptFetcher, NoteGenerator, NotesProcessor};

pub struct NotesProcessorBuilder<T = (), G = ()> {
    transcript_fetcher: T,
    note_generator: G,
}

impl NotesProcessorBuilder {
    pub fn new() -> Self {
        Self {
            transcript_fetcher: (),
            note_generator: (),
        }
    }
}

impl Default for NotesProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, G> NotesProcessorBuilder<T, G> {
    pub fn transcript_fetcher<T2: TranscriptFetcher + Send + Sync + 'static>(
        self,
        transcript_fetcher: T2,
    ) -> NotesProcessorBuilder<T2, G> {
        NotesProcessorBuilder {
            transcript_fetcher,
            note_generator: self.note_generator,
        }
    }

    pub fn note_generator<G2: NoteGenerator + Send + Sync + 'static>(
        self,
        note_generator: G2,
    ) -> NotesProcessorBuilder<T, G2> {
        NotesProcessorBuilder {
            transcript_fetcher: self.transcript_fetcher,
            note_generator,
        }
    }
}

impl<T, G> NotesProcessorBuilder<T, G>
where
    T: TranscriptFetcher + Send + Sync + 'static,
    G: NoteGenerator + Send + Sync + 'static,
{
    pub fn build(self) -> NotesProcessor<T, G> {
        NotesProcessor::new(self.transcript_fetcher, self.note_generator)
    }
}
