use crate::cli::ServeArgs;
use crate::infra::{
    seed_candidates, seed_recruiters, AppState, InMemoryCandidateRepository,
    InMemoryHierarchyRepository,
};
use crate::routes::app_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use chrono::Utc;
use recruit_ops::config::AppConfig;
use recruit_ops::error::AppError;
use recruit_ops::telemetry;
use recruit_ops::workflows::engagement::EngagementService;
use recruit_ops::workflows::hierarchy::HierarchyService;
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

    let candidates = Arc::new(InMemoryCandidateRepository::seeded(seed_candidates(
        Utc::now(),
    )));
    let recruiters = Arc::new(InMemoryHierarchyRepository::seeded(seed_recruiters()));
    let engagement = Arc::new(EngagementService::new(candidates));
    let hierarchy = Arc::new(HierarchyService::new(recruiters));

    let app = app_router(engagement, hierarchy)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "recruiting-operations service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
