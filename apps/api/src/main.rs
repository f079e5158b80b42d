mod config;
mod errors;
mod evaluation;
mod llm_client;
mod pdf;
mod pipeline;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::pdf::PdfExtractLib;
use crate::pipeline::Pipeline;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so RUST_LOG from .env applies to logging
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    if config.groq_api_key.is_none() {
        warn!("GROQ_API_KEY is not set; every AI feature will report a missing credential");
    }

    // Fail fast if the stage list is ever edited into an invalid shape
    let pipeline = Pipeline::resume_enhancement()?;
    info!("Enhancement pipeline ready with {} stages", pipeline.stages().len());

    // One HTTP client shared by every feature; each feature gets its own model
    let pipeline_llm = LlmClient::new(&config, &config.pipeline_model)?;
    let section_llm = pipeline_llm.with_model(&config.section_model);
    let ats_llm = pipeline_llm.with_model(&config.ats_model);
    info!(
        "LLM clients initialized (pipeline: {}, sections: {}, ats: {})",
        config.pipeline_model, config.section_model, config.ats_model
    );

    let state = AppState {
        config: config.clone(),
        pipeline_llm: Arc::new(pipeline_llm),
        section_llm: Arc::new(section_llm),
        ats_llm: Arc::new(ats_llm),
        pdf: Arc::new(PdfExtractLib),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
