//! Axum route handlers for the AI heuristics.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::ai::questions::{Difficulty, InterviewQuestion};
use crate::ai::resume::ResumeAnalysis;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResumeRequest {
    #[serde(default)]
    pub resume_text: String,
}

/// Every field is optional on the wire so a missing one is reported as a 400, not a 422.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsRequest {
    pub job_title: Option<String>,
    pub skills: Option<Vec<String>>,
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<InterviewQuestion>,
}

/// POST /api/ai/analyze-resume
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeResumeRequest>,
) -> Result<Json<ResumeAnalysis>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("Resume text is required".to_string()));
    }

    let analysis = state.ai.analyze_resume(&request.resume_text).await?;
    Ok(Json(analysis))
}

/// POST /api/ai/generate-questions
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuestionsRequest>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    let (Some(job_title), Some(skills), Some(difficulty)) =
        (request.job_title, request.skills, request.difficulty)
    else {
        return Err(AppError::Validation(
            "Job title, skills, and difficulty are required".to_string(),
        ));
    };
    if job_title.trim().is_empty() {
        return Err(AppError::Validation("Job title cannot be empty".to_string()));
    }

    let questions = state
        .ai
        .generate_questions(&job_title, &skills, difficulty)
        .await?;
    Ok(Json(GenerateQuestionsResponse { questions }))
}
