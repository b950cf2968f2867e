use crate::cli::ServeArgs;
use crate::infra::{demo_actor, seed_workspace, AppState};
use crate::routes::with_crm_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use echo_crm::config::AppConfig;
use echo_crm::error::AppError;
use echo_crm::listings::agreements::AgreementService;
use echo_crm::listings::copy::CopyService;
use echo_crm::listings::memory::{MemoryActivityLog, MemoryCrmStore, StaticActorProvider};
use echo_crm::telemetry;
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

    let store = Arc::new(MemoryCrmStore::new());
    seed_workspace(&store);

    let copy_service = Arc::new(CopyService::new(store.clone()));
    let agreement_service = Arc::new(AgreementService::new(
        store.clone(),
        Arc::new(StaticActorProvider::authenticated(demo_actor())),
        store.clone(),
        Arc::new(MemoryActivityLog::default()),
    ));

    let app = with_crm_routes(copy_service, agreement_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "echo crm service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
