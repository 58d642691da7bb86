use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use super::decision::DecisionPolicy;
use super::domain::LoanApplicationSubmission;
use super::repository::{ApplicationRecord, ApplicationRepository};
use super::service::LoanApplicationService;
use super::statistics::StatisticsSummary;
use crate::error::AppError;

/// Router builder exposing HTTP endpoints for intake, listing, and dashboard statistics.
pub fn application_router<R, D>(service: Arc<LoanApplicationService<R, D>>) -> Router
where
    R: ApplicationRepository + 'static,
    D: DecisionPolicy + 'static,
{
    Router::new()
        .route(
            "/api/v1/loans/applications",
            post(submit_handler::<R, D>).get(list_handler::<R, D>),
        )
        .route("/api/v1/loans/statistics", get(statistics_handler::<R, D>))
        .with_state(service)
}

async fn simulate_latency<R, D>(service: &LoanApplicationService<R, D>)
where
    R: ApplicationRepository + 'static,
    D: DecisionPolicy + 'static,
{
    let latency = service.simulated_latency();
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

pub(crate) async fn submit_handler<R, D>(
    State(service): State<Arc<LoanApplicationService<R, D>>>,
    payload: Result<Json<LoanApplicationSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<ApplicationRecord>), AppError>
where
    R: ApplicationRepository + 'static,
    D: DecisionPolicy + 'static,
{
    simulate_latency(&service).await;

    let Json(submission) = payload?;
    let record = service.intake(submission)?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub(crate) async fn list_handler<R, D>(
    State(service): State<Arc<LoanApplicationService<R, D>>>,
) -> Result<Json<Vec<ApplicationRecord>>, AppError>
where
    R: ApplicationRepository + 'static,
    D: DecisionPolicy + 'static,
{
    simulate_latency(&service).await;

    Ok(Json(service.list_applications()?))
}

pub(crate) async fn statistics_handler<R, D>(
    State(service): State<Arc<LoanApplicationService<R, D>>>,
) -> Result<Json<StatisticsSummary>, AppError>
where
    R: ApplicationRepository + 'static,
    D: DecisionPolicy + 'static,
{
    simulate_latency(&service).await;

    Ok(Json(service.statistics()?))
}
