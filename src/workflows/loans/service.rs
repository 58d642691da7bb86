use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::decision::DecisionPolicy;
use super::domain::{ApplicationId, LoanApplicationSubmission};
use super::intake::{IntakeGuard, IntakeViolation, ValidatedSubmission};
use super::repository::{ApplicationRecord, ApplicationRepository, RepositoryError};
use super::statistics::{self, StatisticsSummary};

/// Service composing the intake guard, record store, and decision policy.
pub struct LoanApplicationService<R, D> {
    guard: Arc<IntakeGuard>,
    repository: Arc<R>,
    policy: Arc<D>,
    simulated_latency: Duration,
}

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("app-{id:06}"))
}

impl<R, D> LoanApplicationService<R, D>
where
    R: ApplicationRepository + 'static,
    D: DecisionPolicy + 'static,
{
    pub fn new(repository: Arc<R>, policy: Arc<D>) -> Self {
        Self::with_guard(IntakeGuard::default(), repository, policy)
    }

    pub fn with_guard(guard: IntakeGuard, repository: Arc<R>, policy: Arc<D>) -> Self {
        Self {
            guard: Arc::new(guard),
            repository,
            policy,
            simulated_latency: Duration::ZERO,
        }
    }

    /// Delay the HTTP handlers apply before answering, to mimic a remote backend.
    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    pub fn simulated_latency(&self) -> Duration {
        self.simulated_latency
    }

    /// Validate raw form input and submit it.
    pub fn intake(
        &self,
        submission: LoanApplicationSubmission,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let validated = self.guard.validate(submission)?;
        self.submit(validated)
    }

    /// Store a validated submission with a fresh id, a decided status, and the current time.
    pub fn submit(
        &self,
        submission: ValidatedSubmission,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let status = self.policy.decide(&submission);
        let fields = submission.into_parts();

        let record = ApplicationRecord {
            id: next_application_id(),
            full_name: fields.full_name,
            email: fields.email,
            phone_number: fields.phone_number,
            loan_amount: fields.loan_amount,
            loan_purpose: fields.loan_purpose,
            employment_status: fields.employment_status,
            annual_income: fields.annual_income,
            status,
            created_at: Utc::now(),
        };

        let stored = self.repository.append(record)?;
        info!(
            application_id = %stored.id,
            status = stored.status.label(),
            purpose = stored.loan_purpose.label(),
            "loan application stored"
        );
        Ok(stored)
    }

    /// Every stored application in submission order.
    pub fn list_applications(&self) -> Result<Vec<ApplicationRecord>, ApplicationServiceError> {
        Ok(self.repository.list_all()?)
    }

    pub fn statistics(&self) -> Result<StatisticsSummary, ApplicationServiceError> {
        self.statistics_as_of(Utc::now())
    }

    /// Recompute the dashboard summary with the month window ending at `as_of`.
    pub fn statistics_as_of(
        &self,
        as_of: DateTime<Utc>,
    ) -> Result<StatisticsSummary, ApplicationServiceError> {
        let records = self.repository.list_all()?;
        let summary = statistics::summarize(&records, as_of);
        debug!(
            total = summary.total_applications,
            approval_rate = summary.approval_rate,
            "recomputed loan statistics"
        );
        Ok(summary)
    }
}

/// Error raised by the loan application service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
