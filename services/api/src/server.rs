use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryBookingRepository, InMemoryEligibilityStore};
use crate::routes::with_workflow_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use campus_policy::config::AppConfig;
use campus_policy::error::AppError;
use campus_policy::telemetry;
use campus_policy::workflows::hostel::HostelBookingService;
use campus_policy::workflows::placement::EligibilityService;
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

    let eligibility_service = Arc::new(EligibilityService::new(
        Arc::new(InMemoryEligibilityStore::default()),
        &config.policy.eligibility,
    ));
    let hostel_service = Arc::new(HostelBookingService::new(
        Arc::new(InMemoryBookingRepository::default()),
        &config.policy.tariff,
    ));

    let app = with_workflow_routes(eligibility_service, hostel_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        min_cgpa = config.policy.eligibility.min_cgpa,
        "campus policy service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
