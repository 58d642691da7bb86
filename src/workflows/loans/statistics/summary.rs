use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Datelike, Utc};

use super::super::domain::{ApplicationStatus, LoanPurpose};
use super::super::repository::ApplicationRecord;
use super::views::{MonthlyEntry, StatisticsSummary};

/// Number of calendar months in the trend series, ending with the current month.
pub const WINDOW_MONTHS: usize = 6;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq)]
pub struct MonthBucket {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
    pub applications: usize,
    pub approvals: usize,
    pub amount: f64,
}

impl MonthBucket {
    fn empty(month_index: i32) -> Self {
        Self {
            year: month_index.div_euclid(12),
            month: month_index.rem_euclid(12) as u32 + 1,
            applications: 0,
            approvals: 0,
            amount: 0.0,
        }
    }

    pub fn label(&self) -> &'static str {
        MONTH_LABELS[(self.month as usize - 1) % 12]
    }

    pub fn to_entry(&self) -> MonthlyEntry {
        MonthlyEntry {
            month: self.label(),
            period: format!("{:04}-{:02}", self.year, self.month),
            applications: self.applications,
            approvals: self.approvals,
            amount: self.amount,
        }
    }
}

/// Raw tallies over a record list; `summary` orders and derives the dashboard figures.
#[derive(Debug, Default)]
pub struct StatisticsReport {
    pub total_applications: usize,
    pub total_loan_amount: f64,
    pub status_counts: HashMap<ApplicationStatus, usize>,
    pub purpose_counts: HashMap<LoanPurpose, usize>,
    /// Oldest first, always `WINDOW_MONTHS` long.
    pub months: Vec<MonthBucket>,
}

// Months since year 0, so consecutive calendar months differ by one.
fn month_index(at: &DateTime<Utc>) -> i32 {
    at.year() * 12 + at.month0() as i32
}

impl StatisticsReport {
    pub fn build(records: &[ApplicationRecord], as_of: DateTime<Utc>) -> Self {
        let current = month_index(&as_of);
        let oldest = current - (WINDOW_MONTHS as i32 - 1);

        let mut report = Self {
            months: (oldest..=current).map(MonthBucket::empty).collect(),
            ..Self::default()
        };

        for record in records {
            report.total_applications += 1;
            report.total_loan_amount += record.loan_amount;
            *report.status_counts.entry(record.status).or_default() += 1;
            *report.purpose_counts.entry(record.loan_purpose).or_default() += 1;

            let index = month_index(&record.created_at);
            if (oldest..=current).contains(&index) {
                let bucket = &mut report.months[(index - oldest) as usize];
                bucket.applications += 1;
                bucket.amount += record.loan_amount;
                if record.status == ApplicationStatus::Approved {
                    bucket.approvals += 1;
                }
            }
        }

        report
    }

    pub fn count(&self, status: ApplicationStatus) -> usize {
        self.status_counts.get(&status).copied().unwrap_or(0)
    }

    pub fn average_loan_amount(&self) -> f64 {
        if self.total_applications == 0 {
            return 0.0;
        }
        self.total_loan_amount / self.total_applications as f64
    }

    pub fn approval_rate(&self) -> f64 {
        if self.total_applications == 0 {
            return 0.0;
        }
        self.count(ApplicationStatus::Approved) as f64 / self.total_applications as f64 * 100.0
    }

    pub fn summary(&self) -> StatisticsSummary {
        let loan_purposes: BTreeMap<&'static str, usize> = LoanPurpose::ordered()
            .into_iter()
            .filter_map(|purpose| {
                self.purpose_counts
                    .get(&purpose)
                    .map(|count| (purpose.label(), *count))
            })
            .collect();

        let monthly_data = self.months.iter().map(MonthBucket::to_entry).collect();

        StatisticsSummary {
            total_applications: self.total_applications,
            total_approved: self.count(ApplicationStatus::Approved),
            total_rejected: self.count(ApplicationStatus::Rejected),
            total_pending: self.count(ApplicationStatus::Pending),
            average_loan_amount: self.average_loan_amount(),
            approval_rate: self.approval_rate(),
            loan_purposes,
            monthly_data,
        }
    }
}
