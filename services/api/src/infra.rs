use ai_readiness::assessment::{AssessmentService, BriefTimezone, InMemoryAssessmentRepository};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type InMemoryAssessmentService = AssessmentService<InMemoryAssessmentRepository>;

pub(crate) fn in_memory_service(
    timezone: BriefTimezone,
) -> (Arc<InMemoryAssessmentService>, Arc<InMemoryAssessmentRepository>) {
    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let service = Arc::new(AssessmentService::new(repository.clone(), timezone));
    (service, repository)
}

/// clap value parser for `--timezone`.
pub(crate) fn parse_timezone(raw: &str) -> Result<BriefTimezone, String> {
    BriefTimezone::parse(raw)
        .ok_or_else(|| format!("'{raw}' is not 'local', 'utc' or an offset like +02:00"))
}
