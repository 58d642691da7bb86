use serde::Serialize;

use super::domain::{EmploymentStatus, LoanApplicationSubmission, LoanPurpose};

/// Validation errors raised by the intake guard.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("full name must be at least {min} characters")]
    NameTooShort { min: usize },
    #[error("email address '{0}' is not valid")]
    InvalidEmail(String),
    #[error("phone number must contain at least {min} characters")]
    PhoneTooShort { min: usize },
    #[error("loan amount must be between {min} and {max} (found {found})")]
    LoanAmountOutOfRange { min: f64, max: f64, found: f64 },
    #[error("annual income must be at least {min} (found {found})")]
    IncomeBelowMinimum { min: f64, found: f64 },
}

const DEFAULT_MIN_LOAN_AMOUNT: f64 = 1_000.0;
const DEFAULT_MAX_LOAN_AMOUNT: f64 = 100_000.0;
const DEFAULT_MIN_ANNUAL_INCOME: f64 = 12_000.0;
const MIN_NAME_CHARS: usize = 2;
const MIN_PHONE_CHARS: usize = 10;

/// Bounds applied to the numeric fields of a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakePolicy {
    min_loan_amount: f64,
    max_loan_amount: f64,
    min_annual_income: f64,
}

impl IntakePolicy {
    pub fn new(min_loan_amount: f64, max_loan_amount: f64, min_annual_income: f64) -> Self {
        let amounts_valid = min_loan_amount.is_finite()
            && max_loan_amount.is_finite()
            && min_loan_amount > 0.0
            && min_loan_amount <= max_loan_amount;
        let (min_loan_amount, max_loan_amount) = if amounts_valid {
            (min_loan_amount, max_loan_amount)
        } else {
            (DEFAULT_MIN_LOAN_AMOUNT, DEFAULT_MAX_LOAN_AMOUNT)
        };

        let min_annual_income = if min_annual_income.is_finite() && min_annual_income >= 0.0 {
            min_annual_income
        } else {
            DEFAULT_MIN_ANNUAL_INCOME
        };

        Self {
            min_loan_amount,
            max_loan_amount,
            min_annual_income,
        }
    }
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_MIN_LOAN_AMOUNT,
            DEFAULT_MAX_LOAN_AMOUNT,
            DEFAULT_MIN_ANNUAL_INCOME,
        )
    }
}

/// A submission whose fields passed the intake checks. Only the guard can build one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedSubmission {
    full_name: String,
    email: String,
    phone_number: String,
    loan_amount: f64,
    loan_purpose: LoanPurpose,
    employment_status: EmploymentStatus,
    annual_income: f64,
}

impl ValidatedSubmission {
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn loan_amount(&self) -> f64 {
        self.loan_amount
    }

    pub fn loan_purpose(&self) -> LoanPurpose {
        self.loan_purpose
    }

    pub fn employment_status(&self) -> EmploymentStatus {
        self.employment_status
    }

    pub fn annual_income(&self) -> f64 {
        self.annual_income
    }

    pub(crate) fn into_parts(self) -> LoanApplicationSubmission {
        LoanApplicationSubmission {
            full_name: self.full_name,
            email: self.email,
            phone_number: self.phone_number,
            loan_amount: self.loan_amount,
            loan_purpose: self.loan_purpose,
            employment_status: self.employment_status,
            annual_income: self.annual_income,
        }
    }
}

/// Guard responsible for producing `ValidatedSubmission` instances.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    policy: IntakePolicy,
}

impl IntakeGuard {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    /// Trim and normalize the free-text fields, then check every field against the policy.
    pub fn validate(
        &self,
        submission: LoanApplicationSubmission,
    ) -> Result<ValidatedSubmission, IntakeViolation> {
        let full_name = submission.full_name.trim().to_string();
        if full_name.chars().count() < MIN_NAME_CHARS {
            return Err(IntakeViolation::NameTooShort {
                min: MIN_NAME_CHARS,
            });
        }

        let email = submission.email.trim().to_ascii_lowercase();
        if !looks_like_email(&email) {
            return Err(IntakeViolation::InvalidEmail(email));
        }

        let phone_number = submission.phone_number.trim().to_string();
        if phone_number.chars().count() < MIN_PHONE_CHARS {
            return Err(IntakeViolation::PhoneTooShort {
                min: MIN_PHONE_CHARS,
            });
        }

        let loan_amount = submission.loan_amount;
        if !loan_amount.is_finite()
            || loan_amount < self.policy.min_loan_amount
            || loan_amount > self.policy.max_loan_amount
        {
            return Err(IntakeViolation::LoanAmountOutOfRange {
                min: self.policy.min_loan_amount,
                max: self.policy.max_loan_amount,
                found: loan_amount,
            });
        }

        let annual_income = submission.annual_income;
        if !annual_income.is_finite() || annual_income < self.policy.min_annual_income {
            return Err(IntakeViolation::IncomeBelowMinimum {
                min: self.policy.min_annual_income,
                found: annual_income,
            });
        }

        Ok(ValidatedSubmission {
            full_name,
            email,
            phone_number,
            loan_amount,
            loan_purpose: submission.loan_purpose,
            employment_status: submission.employment_status,
            annual_income,
        })
    }
}

// local@domain.tld with no whitespace, exactly one '@', and no empty domain labels.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}
