use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyEntry {
    pub month: &'static str,
    pub period: String,
    pub applications: usize,
    pub approvals: usize,
    pub amount: f64,
}

/// Dashboard payload. Rates and averages are zero when no applications exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummary {
    pub total_applications: usize,
    pub total_approved: usize,
    pub total_rejected: usize,
    pub total_pending: usize,
    pub average_loan_amount: f64,
    pub approval_rate: f64,
    pub loan_purposes: BTreeMap<&'static str, usize>,
    pub monthly_data: Vec<MonthlyEntry>,
}
