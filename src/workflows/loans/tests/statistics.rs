use super::common::*;
use crate::workflows::loans::domain::{ApplicationStatus, LoanPurpose};
use crate::workflows::loans::repository::ApplicationRecord;
use crate::workflows::loans::sample::sample_applications;
use crate::workflows::loans::statistics::{summarize, StatisticsReport, WINDOW_MONTHS};

fn mixed_records() -> Vec<ApplicationRecord> {
    vec![
        record(
            "r1",
            10_000.0,
            LoanPurpose::HomeImprovement,
            ApplicationStatus::Approved,
            utc(2026, 10, 2),
        ),
        record(
            "r2",
            20_000.0,
            LoanPurpose::HomeImprovement,
            ApplicationStatus::Pending,
            utc(2026, 10, 15),
        ),
        record(
            "r3",
            5_000.0,
            LoanPurpose::Education,
            ApplicationStatus::Rejected,
            utc(2026, 7, 30),
        ),
        record(
            "r4",
            40_000.0,
            LoanPurpose::BusinessLoan,
            ApplicationStatus::Approved,
            utc(2026, 5, 1),
        ),
        // Falls one month before the window starting in May.
        record(
            "r5",
            1_000.0,
            LoanPurpose::Other,
            ApplicationStatus::Pending,
            utc(2026, 4, 30),
        ),
    ]
}

#[test]
fn empty_store_produces_zeroed_summary() {
    let summary = summarize(&[], utc(2026, 10, 19));

    assert_eq!(summary.total_applications, 0);
    assert_eq!(summary.total_approved, 0);
    assert_eq!(summary.total_rejected, 0);
    assert_eq!(summary.total_pending, 0);
    assert_eq!(summary.average_loan_amount, 0.0);
    assert_eq!(summary.approval_rate, 0.0);
    assert!(summary.loan_purposes.is_empty());
    assert_eq!(summary.monthly_data.len(), WINDOW_MONTHS);
    assert!(summary
        .monthly_data
        .iter()
        .all(|entry| entry.applications == 0 && entry.approvals == 0 && entry.amount == 0.0));

    let json = serde_json::to_value(&summary).expect("serializes");
    assert_eq!(json["averageLoanAmount"], serde_json::json!(0.0));
    assert_eq!(json["approvalRate"], serde_json::json!(0.0));
}

#[test]
fn totals_partition_by_status_and_purpose() {
    let records = mixed_records();
    let summary = summarize(&records, utc(2026, 10, 19));

    assert_eq!(summary.total_applications, 5);
    assert_eq!(
        summary.total_approved + summary.total_rejected + summary.total_pending,
        summary.total_applications
    );
    assert_eq!(
        summary.loan_purposes.values().sum::<usize>(),
        summary.total_applications
    );
    assert_eq!(summary.loan_purposes.get("Home Improvement"), Some(&2));
    assert!(!summary.loan_purposes.contains_key("Vehicle Purchase"));
    assert_eq!(summary.average_loan_amount, 76_000.0 / 5.0);
    assert_eq!(summary.approval_rate, 40.0);
}

#[test]
fn monthly_window_covers_six_calendar_months_oldest_first() {
    let summary = summarize(&mixed_records(), utc(2026, 10, 19));

    let labels: Vec<&str> = summary.monthly_data.iter().map(|entry| entry.month).collect();
    assert_eq!(labels, vec!["May", "Jun", "Jul", "Aug", "Sep", "Oct"]);
    assert_eq!(summary.monthly_data[0].period, "2026-05");
    assert_eq!(summary.monthly_data[5].period, "2026-10");

    let october = &summary.monthly_data[5];
    assert_eq!(october.applications, 2);
    assert_eq!(october.approvals, 1);
    assert_eq!(october.amount, 30_000.0);

    let july = &summary.monthly_data[2];
    assert_eq!((july.applications, july.approvals, july.amount), (1, 0, 5_000.0));

    let may = &summary.monthly_data[0];
    assert_eq!((may.applications, may.approvals), (1, 1));

    // The April record counts in the totals but not in the series.
    let in_window: usize = summary
        .monthly_data
        .iter()
        .map(|entry| entry.applications)
        .sum();
    assert_eq!(in_window, 4);
}

#[test]
fn window_wraps_across_year_boundary() {
    let records = vec![
        record(
            "dec",
            3_000.0,
            LoanPurpose::VehiclePurchase,
            ApplicationStatus::Approved,
            utc(2025, 12, 31),
        ),
        record(
            "sep",
            4_000.0,
            LoanPurpose::VehiclePurchase,
            ApplicationStatus::Pending,
            utc(2025, 9, 1),
        ),
        record(
            "future",
            6_000.0,
            LoanPurpose::VehiclePurchase,
            ApplicationStatus::Pending,
            utc(2026, 3, 1),
        ),
    ];

    let report = StatisticsReport::build(&records, utc(2026, 2, 10));
    let periods: Vec<(i32, u32)> = report
        .months
        .iter()
        .map(|bucket| (bucket.year, bucket.month))
        .collect();
    assert_eq!(
        periods,
        vec![(2025, 9), (2025, 10), (2025, 11), (2025, 12), (2026, 1), (2026, 2)]
    );
    assert_eq!(report.months[0].applications, 1);
    assert_eq!(report.months[3].approvals, 1);
    assert_eq!(
        report.months.iter().map(|bucket| bucket.applications).sum::<usize>(),
        2
    );
    assert_eq!(report.total_applications, 3);
}

#[test]
fn same_month_amounts_accumulate() {
    let records = vec![
        record(
            "a",
            10_000.0,
            LoanPurpose::DebtConsolidation,
            ApplicationStatus::Pending,
            utc(2026, 8, 3),
        ),
        record(
            "b",
            20_000.0,
            LoanPurpose::DebtConsolidation,
            ApplicationStatus::Rejected,
            utc(2026, 8, 28),
        ),
    ];

    let summary = summarize(&records, utc(2026, 10, 1));
    let august = summary
        .monthly_data
        .iter()
        .find(|entry| entry.period == "2026-08")
        .expect("August in window");

    assert_eq!(august.applications, 2);
    assert_eq!(august.amount, 30_000.0);
}

#[test]
fn sample_data_produces_seeded_dashboard() {
    let summary = summarize(&sample_applications(), utc(2024, 5, 20));

    assert_eq!(summary.total_applications, 4);
    assert_eq!(summary.total_approved, 2);
    assert_eq!(summary.total_rejected, 1);
    assert_eq!(summary.total_pending, 1);
    assert_eq!(summary.average_loan_amount, 25_000.0);
    assert_eq!(summary.approval_rate, 50.0);

    let may = summary.monthly_data.last().expect("current month");
    assert_eq!(may.month, "May");
    assert_eq!((may.applications, may.approvals, may.amount), (4, 2, 100_000.0));
}
