use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryChecklistRepository, InMemoryFolderRepository};
use crate::routes::with_filing_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use loandesk::config::AppConfig;
use loandesk::error::AppError;
use loandesk::telemetry;
use loandesk::workflows::filing::DocumentFilingService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let checklists = Arc::new(InMemoryChecklistRepository::seeded());
    let folders = Arc::new(InMemoryFolderRepository::default());
    let filing_service = Arc::new(DocumentFilingService::new(checklists, folders));

    let app = with_filing_routes(filing_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "document filing service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
