use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_diagnosis_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use jouzukan::config::AppConfig;
use jouzukan::diagnosis::{Catalog, DiagnosisEngine, DiagnosisService, LogSubmissionSink};
use jouzukan::error::AppError;
use jouzukan::telemetry;
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

    let catalog = Arc::new(Catalog::standard()?);
    info!(
        questions = catalog.questions.len(),
        archetypes = catalog.archetypes.len(),
        "catalog validated"
    );
    let engine = Arc::new(DiagnosisEngine::new(catalog)?);
    let diagnosis_service = Arc::new(DiagnosisService::new(
        engine,
        Arc::new(LogSubmissionSink),
        config.submission,
    ));

    let app = with_diagnosis_routes(diagnosis_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        submissions = config.submission.enabled,
        "diagnosis service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
