//! Axum route handlers for the board view.

use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::jobs::board::{build_board, Board};
use crate::jobs::models::JobPosting;

#[derive(Debug, Deserialize)]
pub struct BoardRequest {
    pub jobs: Vec<JobPosting>,
}

/// POST /api/v1/board
///
/// Renders the supplied postings as kanban columns.
pub async fn handle_build_board(Json(req): Json<BoardRequest>) -> Result<Json<Board>, AppError> {
    if let Some(job) = req
        .jobs
        .iter()
        .find(|j| j.company.trim().is_empty() || j.title.trim().is_empty())
    {
        return Err(AppError::Validation(format!(
            "job {} must have a company and a title",
            job.id
        )));
    }

    tracing::debug!("Building board for {} jobs", req.jobs.len());
    Ok(Json(build_board(&req.jobs)))
}
