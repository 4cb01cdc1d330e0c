use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use railmadad::application::services::{ComplaintService, TranscriptionService, TriageService};
use railmadad::infrastructure::audio::TranscriptionEngineFactory;
use railmadad::infrastructure::llm::ClassifierFactory;
use railmadad::infrastructure::observability::{TracingConfig, init_tracing};
use railmadad::infrastructure::persistence::InMemoryComplaintRepository;
use railmadad::presentation::{AppState, Environment, ScaffoldConfig, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging))
        .context("failed to initialize tracing")?;

    let scaffold_config = ScaffoldConfig::from_env();

    let classifier = ClassifierFactory::create(&settings.classifier, &scaffold_config)
        .context("failed to create complaint classifier")?;
    let transcription_engine = TranscriptionEngineFactory::create(&settings.transcription)
        .context("failed to create transcription engine")?;

    let triage_service = Arc::new(TriageService::new(classifier));
    let transcription_service = Arc::new(TranscriptionService::new(transcription_engine));
    let complaint_service = Arc::new(ComplaintService::new(
        Arc::new(InMemoryComplaintRepository::new()),
        Arc::clone(&triage_service),
    ));

    let state = AppState {
        triage_service,
        transcription_service,
        complaint_service,
        scaffold_config,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
