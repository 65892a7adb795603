use std::sync::Arc;

use tokio::net::TcpListener;

use yt_sampler::application::services::SamplerService;
use yt_sampler::infrastructure::audio::SpliceServiceClient;
use yt_sampler::infrastructure::downloader::YtDlpDownloader;
use yt_sampler::infrastructure::observability::{TracingConfig, init_tracing};
use yt_sampler::infrastructure::storage::LocalWorkspaceStore;
use yt_sampler::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env();

    init_tracing(&TracingConfig::new(settings.environment), settings.server.port);

    let downloader = Arc::new(YtDlpDownloader::new(
        settings.downloader.binary.clone(),
        settings.downloader.format.clone(),
        settings.max_file_size,
    ));
    let processor = Arc::new(SpliceServiceClient::new(
        &settings.processor_url,
        settings.http_timeout,
    )?);
    let workspace_store = Arc::new(LocalWorkspaceStore::new(settings.temp_dir.clone()));

    tracing::info!(
        processor = %processor.endpoint(),
        temp_dir = %settings.temp_dir.display(),
        max_file_size = settings.max_file_size,
        max_concurrent_jobs = settings.max_concurrent_jobs,
        timeout_secs = settings.http_timeout.as_secs(),
        "Pipeline configured"
    );

    let sampler_service = Arc::new(SamplerService::new(
        downloader,
        processor,
        workspace_store,
        settings.max_file_size,
        settings.max_concurrent_jobs,
    ));

    let addr = settings.bind_address();
    let state = AppState {
        sampler_service,
        settings,
    };

    let router = create_router(state);

    let listener = TcpListener::bind(addr.as_str()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
