use axum::{extract::Query, http::StatusCode, Json};
use chrono::Utc;
use contracts::domain::a002_job_posting::aggregate::JobPosting;
use contracts::shared::filter::FilterSet;

use crate::domain::a002_job_posting::service;
use crate::shared::data::db::get_connection;

/// GET /api/jobs?role=&location=&company=&description=&date=&salary=
pub async fn search(Query(filters): Query<FilterSet>) -> Result<Json<Vec<JobPosting>>, StatusCode> {
    match service::search(get_connection(), &filters, Utc::now()).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Job search failed: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
