use std::time::Duration;

use clap::Parser;
use yt_notes::{
    gemini::GeminiClient,
    server::{router, serve, ServeConfig},
    tracing::init_tracing_subscriber,
    yt::transcript_api::TranscriptApiClient,
    NotesProcessorBuilder,
};

#[derive(Parser)]
#[command(name = "yt-notes", about = "YouTube transcript notes API")]
struct Cli {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: String,

    /// Gemini model used to write the notes
    #[arg(long, env = "GEMINI_MODEL", default_value = GeminiClient::DEFAULT_MODEL)]
    gemini_model: String,

    /// Gemini REST API base URL
    #[arg(long, env = "GEMINI_BASE_URL", default_value = GeminiClient::DEFAULT_BASE_URL)]
    gemini_base_url: String,

    /// Transcript language codes, highest priority first
    #[arg(
        long,
        env = "TRANSCRIPT_LANGUAGES",
        value_delimiter = ',',
        default_value = "en"
    )]
    transcript_languages: Vec<String>,

    /// Timeout applied to every outbound request, in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "120")]
    request_timeout_secs: u64,

    /// Address to bind the HTTP server to
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0")]
    bind: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "8000")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let request_timeout = Duration::from_secs(cli.request_timeout_secs);
    let http_client = reqwest::Client::builder()
        .timeout(request_timeout)
        .build()?;

    let transcript_fetcher = TranscriptApiClient::new()?
        .with_languages(cli.transcript_languages)
        .with_timeout(request_timeout);
    let note_generator = GeminiClient::new(cli.gemini_api_key)
        .with_client(http_client)
        .with_base_url(cli.gemini_base_url)
        .with_model(cli.gemini_model);

    tracing::info!(
        model = note_generator.model(),
        languages = ?transcript_fetcher.languages(),
        "Providers configured"
    );

    let processor = NotesProcessorBuilder::new()
        .transcript_fetcher(transcript_fetcher)
        .note_generator(note_generator)
        .build();

    serve(
        router(processor),
        ServeConfig {
            bind: cli.bind,
            port: cli.port,
        },
    )
    .await
}
