//! Axum route handlers for the matching API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::ranking::Ranked;
use crate::matching::scorer::{CandidateSignals, JobSignals, MatchBreakdown};
use crate::matching::service::{match_candidates_for_job, recommended_jobs_for_candidate};
use crate::models::job::Job;
use crate::models::profile::Profile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCandidatesRequest {
    pub job_id: String,
}

#[derive(Debug, Serialize)]
pub struct MatchCandidatesResponse {
    pub candidates: Vec<Ranked<Profile>>,
}

/// Candidate fields accepted by the ad-hoc score endpoint.
#[derive(Debug, Deserialize)]
pub struct CandidateInput {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: u32,
    pub location: Option<String>,
}

/// Job fields accepted by the ad-hoc score endpoint.
#[derive(Debug, Deserialize)]
pub struct JobInput {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub skills_required: Vec<String>,
    #[serde(default)]
    pub experience_min: u32,
    #[serde(default = "default_experience_max")]
    pub experience_max: u32,
    pub location: Option<String>,
    #[serde(default)]
    pub remote_allowed: bool,
}

fn default_experience_max() -> u32 {
    10
}

#[derive(Debug, Deserialize)]
pub struct MatchScoreRequest {
    pub candidate: CandidateInput,
    pub job: JobInput,
}

impl CandidateSignals for CandidateInput {
    fn candidate_id(&self) -> &str {
        &self.id
    }

    fn skills(&self) -> &[String] {
        &self.skills
    }

    fn experience_years(&self) -> u32 {
        self.experience_years
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl JobSignals for JobInput {
    fn job_id(&self) -> &str {
        &self.id
    }

    fn required_skills(&self) -> &[String] {
        &self.skills_required
    }

    fn experience_min(&self) -> u32 {
        self.experience_min
    }

    fn experience_max(&self) -> u32 {
        self.experience_max
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn remote_allowed(&self) -> bool {
        self.remote_allowed
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/ai/match-candidates
///
/// Top available candidates for a job. Unknown job → empty list.
pub async fn handle_match_candidates(
    State(state): State<AppState>,
    Json(request): Json<MatchCandidatesRequest>,
) -> Result<Json<MatchCandidatesResponse>, AppError> {
    let candidates = match_candidates_for_job(
        state.repo.as_ref(),
        state.scorer.clone(),
        &request.job_id,
        state.config.match_candidates_limit,
    )
    .await?;

    Ok(Json(MatchCandidatesResponse { candidates }))
}

/// GET /api/candidates/:id/recommended-jobs
pub async fn handle_recommended_jobs(
    State(state): State<AppState>,
    Path(candidate_id): Path<String>,
) -> Result<Json<Vec<Ranked<Job>>>, AppError> {
    let jobs =
        recommended_jobs_for_candidate(state.repo.as_ref(), state.scorer.clone(), &candidate_id)
            .await?;
    Ok(Json(jobs))
}

/// POST /api/ai/match-score
///
/// Scores an inline candidate against an inline job and explains the result.
pub async fn handle_match_score(
    State(state): State<AppState>,
    Json(request): Json<MatchScoreRequest>,
) -> Json<MatchBreakdown> {
    Json(state.scorer.explain(&request.candidate, &request.job))
}
