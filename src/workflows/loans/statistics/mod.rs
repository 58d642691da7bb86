mod summary;
pub mod views;

use chrono::{DateTime, Utc};

use super::repository::ApplicationRecord;

pub use summary::{MonthBucket, StatisticsReport, WINDOW_MONTHS};
pub use views::{MonthlyEntry, StatisticsSummary};

/// Aggregate `records` into the dashboard view, bucketing months relative to `as_of` (UTC).
pub fn summarize(records: &[ApplicationRecord], as_of: DateTime<Utc>) -> StatisticsSummary {
    StatisticsReport::build(records, as_of).summary()
}
