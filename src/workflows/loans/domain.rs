use serde::{Deserialize, Serialize};

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub String);

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reasons an applicant can pick on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LoanPurpose {
    #[serde(rename = "Home Improvement")]
    HomeImprovement,
    #[serde(rename = "Debt Consolidation")]
    DebtConsolidation,
    #[serde(rename = "Business Loan")]
    BusinessLoan,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Medical Expenses")]
    MedicalExpenses,
    #[serde(rename = "Vehicle Purchase")]
    VehiclePurchase,
    #[serde(rename = "Other")]
    Other,
}

impl LoanPurpose {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::HomeImprovement,
            Self::DebtConsolidation,
            Self::BusinessLoan,
            Self::Education,
            Self::MedicalExpenses,
            Self::VehiclePurchase,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HomeImprovement => "Home Improvement",
            Self::DebtConsolidation => "Debt Consolidation",
            Self::BusinessLoan => "Business Loan",
            Self::Education => "Education",
            Self::MedicalExpenses => "Medical Expenses",
            Self::VehiclePurchase => "Vehicle Purchase",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentStatus {
    #[serde(rename = "Full-Time")]
    FullTime,
    #[serde(rename = "Part-Time")]
    PartTime,
    #[serde(rename = "Self-Employed")]
    SelfEmployed,
    #[serde(rename = "Unemployed")]
    Unemployed,
    #[serde(rename = "Student")]
    Student,
    #[serde(rename = "Retired")]
    Retired,
}

impl EmploymentStatus {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::FullTime,
            Self::PartTime,
            Self::SelfEmployed,
            Self::Unemployed,
            Self::Student,
            Self::Retired,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-Time",
            Self::PartTime => "Part-Time",
            Self::SelfEmployed => "Self-Employed",
            Self::Unemployed => "Unemployed",
            Self::Student => "Student",
            Self::Retired => "Retired",
        }
    }
}

/// Outcome classification assigned once when an application is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Pending, Self::Approved, Self::Rejected]
    }

    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

/// Applicant-entered fields as they arrive from the form, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplicationSubmission {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub loan_amount: f64,
    pub loan_purpose: LoanPurpose,
    pub employment_status: EmploymentStatus,
    pub annual_income: f64,
}
