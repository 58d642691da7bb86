//! Loan application intake, status assignment, and dashboard statistics.
//!
//! Submissions pass through the [`IntakeGuard`] before the service assigns an identifier,
//! a status drawn from the configured [`DecisionPolicy`], and a creation timestamp. The
//! record store is append-only; statistics are recomputed from the full list on every call.

pub mod decision;
pub mod domain;
pub(crate) mod intake;
pub mod repository;
pub mod router;
pub mod sample;
pub mod service;
pub mod statistics;

#[cfg(test)]
mod tests;

pub use decision::{DecisionConfig, DecisionPolicy, RandomDecisionPolicy};
pub use domain::{
    ApplicationId, ApplicationStatus, EmploymentStatus, LoanApplicationSubmission, LoanPurpose,
};
pub use intake::{IntakeGuard, IntakePolicy, IntakeViolation, ValidatedSubmission};
pub use repository::{
    ApplicationRecord, ApplicationRepository, MemoryApplicationRepository, RepositoryError,
};
pub use router::application_router;
pub use service::{ApplicationServiceError, LoanApplicationService};
pub use statistics::{MonthlyEntry, StatisticsSummary};
