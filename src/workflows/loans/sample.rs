//! Demonstration applications loaded into a fresh store so the dashboard has data.

use chrono::{TimeZone, Utc};

use super::domain::{ApplicationId, ApplicationStatus, EmploymentStatus, LoanPurpose};
use super::repository::ApplicationRecord;

struct SampleApplication {
    id: &'static str,
    full_name: &'static str,
    email: &'static str,
    phone_number: &'static str,
    loan_amount: f64,
    loan_purpose: LoanPurpose,
    employment_status: EmploymentStatus,
    annual_income: f64,
    status: ApplicationStatus,
    // (year, month, day, hour, minute) in UTC
    created_at: (i32, u32, u32, u32, u32),
}

const SAMPLES: [SampleApplication; 4] = [
    SampleApplication {
        id: "sample-0001",
        full_name: "John Smith",
        email: "john@example.com",
        phone_number: "(555) 123-4567",
        loan_amount: 25_000.0,
        loan_purpose: LoanPurpose::HomeImprovement,
        employment_status: EmploymentStatus::FullTime,
        annual_income: 75_000.0,
        status: ApplicationStatus::Approved,
        created_at: (2024, 5, 1, 10, 30),
    },
    SampleApplication {
        id: "sample-0002",
        full_name: "Sarah Johnson",
        email: "sarah@example.com",
        phone_number: "(555) 987-6543",
        loan_amount: 15_000.0,
        loan_purpose: LoanPurpose::DebtConsolidation,
        employment_status: EmploymentStatus::PartTime,
        annual_income: 45_000.0,
        status: ApplicationStatus::Pending,
        created_at: (2024, 5, 5, 14, 20),
    },
    SampleApplication {
        id: "sample-0003",
        full_name: "Michael Brown",
        email: "michael@example.com",
        phone_number: "(555) 456-7890",
        loan_amount: 50_000.0,
        loan_purpose: LoanPurpose::BusinessLoan,
        employment_status: EmploymentStatus::SelfEmployed,
        annual_income: 120_000.0,
        status: ApplicationStatus::Approved,
        created_at: (2024, 5, 8, 9, 15),
    },
    SampleApplication {
        id: "sample-0004",
        full_name: "Jessica Williams",
        email: "jessica@example.com",
        phone_number: "(555) 789-0123",
        loan_amount: 10_000.0,
        loan_purpose: LoanPurpose::Education,
        employment_status: EmploymentStatus::Student,
        annual_income: 20_000.0,
        status: ApplicationStatus::Rejected,
        created_at: (2024, 5, 10, 16, 45),
    },
];

/// The four May 2024 sample applications, oldest first.
pub fn sample_applications() -> Vec<ApplicationRecord> {
    SAMPLES
        .iter()
        .filter_map(|sample| {
            let (year, month, day, hour, minute) = sample.created_at;
            let created_at = Utc
                .with_ymd_and_hms(year, month, day, hour, minute, 0)
                .single()?;

            Some(ApplicationRecord {
                id: ApplicationId(sample.id.to_string()),
                full_name: sample.full_name.to_string(),
                email: sample.email.to_string(),
                phone_number: sample.phone_number.to_string(),
                loan_amount: sample.loan_amount,
                loan_purpose: sample.loan_purpose,
                employment_status: sample.employment_status,
                annual_income: sample.annual_income,
                status: sample.status,
                created_at,
            })
        })
        .collect()
}
