//! Matching service — fetches snapshots from the repository and ranks them.
//!
//! Unknown identifiers produce an empty list, never an error. Ranking runs on
//! the blocking pool so the rayon fan-out never stalls a tokio worker.

use std::sync::Arc;

use anyhow::anyhow;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::matching::ranking::{rank_candidates_for_job, rank_jobs_for_candidate, Ranked};
use crate::matching::scorer::MatchScorer;
use crate::models::job::Job;
use crate::models::profile::Profile;
use crate::store::TalentRepository;

/// Available candidates ranked against `job_id`, best first, at most `limit`.
pub async fn match_candidates_for_job(
    repo: &dyn TalentRepository,
    scorer: Arc<dyn MatchScorer>,
    job_id: &str,
    limit: usize,
) -> Result<Vec<Ranked<Profile>>, AppError> {
    let Some(job) = repo.job_by_id(job_id).await? else {
        warn!("match requested for unknown job {job_id}");
        return Ok(Vec::new());
    };

    let candidates = repo
        .profiles_where(&|p: &Profile| p.is_available_candidate())
        .await?;
    debug!("scoring {} candidates against job {job_id}", candidates.len());

    let ranked = tokio::task::spawn_blocking(move || {
        rank_candidates_for_job(scorer.as_ref(), &job, candidates, Some(limit))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("candidate ranking task failed: {e}")))?;

    Ok(ranked)
}

/// Active jobs ranked for `candidate_id`, best first, untruncated.
pub async fn recommended_jobs_for_candidate(
    repo: &dyn TalentRepository,
    scorer: Arc<dyn MatchScorer>,
    candidate_id: &str,
) -> Result<Vec<Ranked<Job>>, AppError> {
    let Some(candidate) = repo.profile_by_id(candidate_id).await? else {
        warn!("recommendations requested for unknown candidate {candidate_id}");
        return Ok(Vec::new());
    };

    let jobs = repo.jobs_where(&|j: &Job| j.is_active()).await?;
    debug!("scoring {} active jobs for candidate {candidate_id}", jobs.len());

    let ranked = tokio::task::spawn_blocking(move || {
        rank_jobs_for_candidate(scorer.as_ref(), &candidate, jobs, None)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("job ranking task failed: {e}")))?;

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::scorer::HeuristicMatchScorer;
    use crate::store::memory::InMemoryStore;

    fn scorer() -> Arc<dyn MatchScorer> {
        Arc::new(HeuristicMatchScorer)
    }

    fn ids_and_scores<T>(ranked: &[Ranked<T>], id: impl Fn(&T) -> &str) -> Vec<(String, u32)> {
        ranked
            .iter()
            .map(|r| (id(&r.record).to_string(), r.match_score))
            .collect()
    }

    #[tokio::test]
    async fn test_candidates_for_senior_ml_job() {
        let store = InMemoryStore::embedded().unwrap();
        let ranked = match_candidates_for_job(&store, scorer(), "job-1", 20)
            .await
            .unwrap();

        assert_eq!(
            ids_and_scores(&ranked, |p: &Profile| p.id.as_str()),
            vec![
                ("candidate-1".to_string(), 90),
                ("candidate-2".to_string(), 80),
                ("candidate-4".to_string(), 54),
                ("candidate-5".to_string(), 38),
            ]
        );
    }

    #[tokio::test]
    async fn test_unavailable_and_non_candidates_are_excluded() {
        let store = InMemoryStore::embedded().unwrap();
        let ranked = match_candidates_for_job(&store, scorer(), "job-3", 20)
            .await
            .unwrap();

        assert!(ranked.iter().all(|r| r.record.id.starts_with("candidate-")));
        assert!(ranked.iter().all(|r| r.record.id != "candidate-3"));
    }

    #[tokio::test]
    async fn test_candidate_limit_applies() {
        let store = InMemoryStore::embedded().unwrap();
        let ranked = match_candidates_for_job(&store, scorer(), "job-1", 2)
            .await
            .unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].record.id, "candidate-1");
    }

    #[tokio::test]
    async fn test_unknown_job_yields_empty() {
        let store = InMemoryStore::embedded().unwrap();
        let ranked = match_candidates_for_job(&store, scorer(), "job-404", 20)
            .await
            .unwrap();
        assert!(ranked.is_empty());
    }

    #[tokio::test]
    async fn test_recommended_jobs_for_candidate() {
        let store = InMemoryStore::embedded().unwrap();
        let ranked = recommended_jobs_for_candidate(&store, scorer(), "candidate-1")
            .await
            .unwrap();

        assert_eq!(
            ids_and_scores(&ranked, |j: &Job| j.id.as_str()),
            vec![
                ("job-1".to_string(), 90),
                ("job-4".to_string(), 83),
                ("job-2".to_string(), 66),
                ("job-3".to_string(), 50),
                ("job-5".to_string(), 49),
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_candidate_yields_empty() {
        let store = InMemoryStore::embedded().unwrap();
        let ranked = recommended_jobs_for_candidate(&store, scorer(), "nobody")
            .await
            .unwrap();
        assert!(ranked.is_empty());
    }
}
