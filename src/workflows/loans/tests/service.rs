use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;

use super::common::*;
use crate::workflows::loans::decision::{DecisionConfig, RandomDecisionPolicy};
use crate::workflows::loans::domain::{ApplicationStatus, LoanPurpose};
use crate::workflows::loans::intake::IntakeViolation;
use crate::workflows::loans::repository::{
    ApplicationRepository, MemoryApplicationRepository, RepositoryError,
};
use crate::workflows::loans::{ApplicationServiceError, LoanApplicationService};

#[test]
fn submit_assigns_id_status_and_timestamp() {
    let (service, repository) = build_service(ApplicationStatus::Approved);
    let before = Utc::now();

    let record = service
        .submit(validated(submission()))
        .expect("submission succeeds");

    assert!(record.id.0.starts_with("app-"));
    assert_eq!(record.status, ApplicationStatus::Approved);
    assert!(record.created_at >= before && record.created_at <= Utc::now());
    assert_eq!(record.full_name, "Avery Quinn");
    assert_eq!(record.loan_purpose, LoanPurpose::HomeImprovement);

    let stored = repository.list_all().expect("list succeeds");
    assert_eq!(stored, vec![record]);
}

#[test]
fn ids_are_unique_across_submissions() {
    let repository = Arc::new(MemoryApplicationRepository::new());
    let service = LoanApplicationService::new(
        repository.clone(),
        Arc::new(RandomDecisionPolicy::seeded(11, DecisionConfig::default())),
    );

    let mut seen = HashSet::new();
    for _ in 0..250 {
        let record = service
            .submit(validated(submission()))
            .expect("submission succeeds");
        assert!(ApplicationStatus::ordered().contains(&record.status));
        assert!(seen.insert(record.id), "duplicate id issued");
    }

    assert_eq!(repository.list_all().expect("list succeeds").len(), 250);
}

#[test]
fn intake_propagates_validation_errors_without_storing() {
    let (service, repository) = build_service(ApplicationStatus::Pending);
    let mut submission = submission();
    submission.loan_amount = 250.0;

    match service.intake(submission) {
        Err(ApplicationServiceError::Intake(IntakeViolation::LoanAmountOutOfRange {
            found,
            ..
        })) => assert_eq!(found, 250.0),
        other => panic!("expected intake violation, got {other:?}"),
    }
    assert!(repository.is_empty());
}

#[test]
fn submit_propagates_repository_errors() {
    let service = LoanApplicationService::new(
        Arc::new(UnavailableRepository),
        Arc::new(FixedDecision(ApplicationStatus::Pending)),
    );

    match service.submit(validated(submission())) {
        Err(ApplicationServiceError::Repository(RepositoryError::Unavailable(reason))) => {
            assert!(reason.contains("offline"))
        }
        other => panic!("expected unavailable repository, got {other:?}"),
    }
    assert!(matches!(
        service.statistics(),
        Err(ApplicationServiceError::Repository(_))
    ));
}

#[test]
fn submitted_records_show_up_in_statistics() {
    let (service, _) = build_service(ApplicationStatus::Pending);

    service
        .intake(submission())
        .expect("submission succeeds");
    let summary = service.statistics().expect("statistics compute");

    assert_eq!(summary.total_applications, 1);
    assert_eq!(summary.total_pending, 1);
    assert_eq!(summary.loan_purposes.get("Home Improvement"), Some(&1));
    let current = summary.monthly_data.last().expect("six months present");
    assert_eq!(current.applications, 1);
    assert_eq!(current.amount, 25_000.0);
}

#[test]
fn list_applications_returns_insertion_order() {
    let (service, _) = build_service(ApplicationStatus::Rejected);

    let first = service.intake(submission()).expect("first submission");
    let mut second_input = submission();
    second_input.loan_purpose = LoanPurpose::MedicalExpenses;
    let second = service.intake(second_input).expect("second submission");

    let listed = service.list_applications().expect("list succeeds");
    assert_eq!(listed, vec![first, second]);
}
