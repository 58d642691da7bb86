use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::loans::decision::DecisionPolicy;
use crate::workflows::loans::domain::{
    ApplicationId, ApplicationStatus, EmploymentStatus, LoanApplicationSubmission, LoanPurpose,
};
use crate::workflows::loans::intake::{IntakeGuard, ValidatedSubmission};
use crate::workflows::loans::repository::{
    ApplicationRecord, ApplicationRepository, MemoryApplicationRepository, RepositoryError,
};
use crate::workflows::loans::LoanApplicationService;

pub(super) fn submission() -> LoanApplicationSubmission {
    LoanApplicationSubmission {
        full_name: "Avery Quinn".to_string(),
        email: "avery@example.com".to_string(),
        phone_number: "(555) 222-3344".to_string(),
        loan_amount: 25_000.0,
        loan_purpose: LoanPurpose::HomeImprovement,
        employment_status: EmploymentStatus::FullTime,
        annual_income: 68_000.0,
    }
}

pub(super) fn validated(submission: LoanApplicationSubmission) -> ValidatedSubmission {
    IntakeGuard::default()
        .validate(submission)
        .expect("fixture submission is valid")
}

pub(super) fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn record(
    id: &str,
    loan_amount: f64,
    loan_purpose: LoanPurpose,
    status: ApplicationStatus,
    created_at: DateTime<Utc>,
) -> ApplicationRecord {
    ApplicationRecord {
        id: ApplicationId(id.to_string()),
        full_name: "Fixture Applicant".to_string(),
        email: "fixture@example.com".to_string(),
        phone_number: "(555) 000-1111".to_string(),
        loan_amount,
        loan_purpose,
        employment_status: EmploymentStatus::PartTime,
        annual_income: 40_000.0,
        status,
        created_at,
    }
}

/// Always returns the same status, so service tests are deterministic.
pub(super) struct FixedDecision(pub(super) ApplicationStatus);

impl DecisionPolicy for FixedDecision {
    fn decide(&self, _submission: &ValidatedSubmission) -> ApplicationStatus {
        self.0
    }
}

pub(super) type MemoryService = LoanApplicationService<MemoryApplicationRepository, FixedDecision>;

pub(super) fn build_service(
    status: ApplicationStatus,
) -> (MemoryService, Arc<MemoryApplicationRepository>) {
    let repository = Arc::new(MemoryApplicationRepository::default());
    let service = LoanApplicationService::new(repository.clone(), Arc::new(FixedDecision(status)));
    (service, repository)
}

pub(super) struct ConflictRepository;

impl ApplicationRepository for ConflictRepository {
    fn append(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Conflict(record.id))
    }

    fn list_all(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl ApplicationRepository for UnavailableRepository {
    fn append(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn list_all(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
