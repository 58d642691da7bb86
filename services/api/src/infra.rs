use loan_desk::config::DeskConfig;
use loan_desk::workflows::loans::sample::sample_applications;
use loan_desk::workflows::loans::{
    LoanApplicationService, MemoryApplicationRepository, RandomDecisionPolicy,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub(crate) type DeskService =
    LoanApplicationService<MemoryApplicationRepository, RandomDecisionPolicy>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Fresh store, optionally pre-loaded with the sample applications.
pub(crate) fn build_repository(seed_sample_data: bool) -> Arc<MemoryApplicationRepository> {
    let repository = if seed_sample_data {
        MemoryApplicationRepository::with_records(sample_applications())
    } else {
        MemoryApplicationRepository::new()
    };
    Arc::new(repository)
}

pub(crate) fn build_service(
    desk: &DeskConfig,
    repository: Arc<MemoryApplicationRepository>,
) -> DeskService {
    let policy = Arc::new(RandomDecisionPolicy::new(desk.decision));
    LoanApplicationService::new(repository, policy).with_simulated_latency(desk.simulated_latency)
}
