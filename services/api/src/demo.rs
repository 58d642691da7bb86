use crate::infra::build_repository;
use chrono::Utc;
use clap::Args;
use loan_desk::config::AppConfig;
use loan_desk::error::AppError;
use loan_desk::workflows::loans::{
    ApplicationRecord, EmploymentStatus, LoanApplicationService, LoanApplicationSubmission,
    LoanPurpose, RandomDecisionPolicy, StatisticsSummary,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

const FIRST_NAMES: [&str; 8] = [
    "Alex", "Jordan", "Taylor", "Casey", "Riley", "Morgan", "Jamie", "Drew",
];
const LAST_NAMES: [&str; 8] = [
    "Garcia", "Patel", "Nguyen", "Okafor", "Schmidt", "Rossi", "Kim", "Silva",
];

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Number of synthetic applications to submit.
    #[arg(long, default_value_t = 10)]
    pub(crate) applications: usize,
    /// Seed for applicant generation and status draws (random when omitted).
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Start from an empty store instead of the sample applications.
    #[arg(long)]
    pub(crate) skip_samples: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        applications,
        seed,
        skip_samples,
    } = args;

    let config = AppConfig::load()?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let policy = match seed {
        Some(seed) => RandomDecisionPolicy::seeded(seed, config.desk.decision),
        None => RandomDecisionPolicy::new(config.desk.decision),
    };

    let repository = build_repository(config.desk.seed_sample_data && !skip_samples);
    let service = LoanApplicationService::new(repository.clone(), Arc::new(policy));

    println!("Loan desk demo");
    println!("Store starts with {} application(s)", repository.len());

    let mut submitted = Vec::with_capacity(applications);
    for _ in 0..applications {
        let record = service.intake(synthetic_submission(&mut rng))?;
        submitted.push(record);
    }

    render_submissions(&submitted);

    let summary = service.statistics()?;
    render_dashboard(&summary);

    Ok(())
}

pub(crate) fn synthetic_submission(rng: &mut impl Rng) -> LoanApplicationSubmission {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    let purposes = LoanPurpose::ordered();
    let employment = EmploymentStatus::ordered();

    LoanApplicationSubmission {
        full_name: format!("{first} {last}"),
        email: format!("{}.{}@example.com", first, last).to_ascii_lowercase(),
        phone_number: format!(
            "(555) {:03}-{:04}",
            rng.gen_range(100..1000),
            rng.gen_range(0..10_000)
        ),
        loan_amount: (rng.gen_range(2..=200) * 500) as f64,
        loan_purpose: purposes[rng.gen_range(0..purposes.len())],
        employment_status: employment[rng.gen_range(0..employment.len())],
        annual_income: (rng.gen_range(12..=180) * 1_000) as f64,
    }
}

fn render_submissions(records: &[ApplicationRecord]) {
    if records.is_empty() {
        println!("\nSubmitted applications: none");
        return;
    }

    println!("\nSubmitted applications");
    for record in records {
        println!(
            "- {} | {} | {} | {} | {}",
            record.id,
            record.full_name,
            format_currency(record.loan_amount),
            record.loan_purpose.label(),
            record.status.label()
        );
    }
}

fn render_dashboard(summary: &StatisticsSummary) {
    println!("\nDashboard (as of {})", Utc::now().format("%Y-%m-%d %H:%M UTC"));
    println!("Total applications: {}", summary.total_applications);
    println!(
        "Approved: {} ({:.1}% approval rate)",
        summary.total_approved, summary.approval_rate
    );
    println!("Rejected: {}", summary.total_rejected);
    println!("Pending: {}", summary.total_pending);
    println!(
        "Average loan amount: {}",
        format_currency(summary.average_loan_amount)
    );

    if summary.loan_purposes.is_empty() {
        println!("\nLoan purposes: none");
    } else {
        println!("\nLoan purposes");
        for (purpose, count) in &summary.loan_purposes {
            println!("- {purpose}: {count}");
        }
    }

    println!("\nMonthly applications");
    for entry in &summary.monthly_data {
        println!(
            "- {} ({}): {} submitted, {} approved, {}",
            entry.month,
            entry.period,
            entry.applications,
            entry.approvals,
            format_currency(entry.amount)
        );
    }
}

/// Whole dollars with thousands separators, e.g. `$25,000`.
pub(crate) fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}")
}
