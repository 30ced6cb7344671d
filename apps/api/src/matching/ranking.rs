//! Ranking — scores every (candidate, job) pair independently and orders the results.
//!
//! Scoring fans out over the rayon pool; the collected vector keeps input order,
//! and a single stable sort afterwards makes the output independent of scheduling.

use rayon::prelude::*;
use serde::Serialize;

use crate::matching::scorer::{CandidateSignals, JobSignals, MatchScorer};

/// A record augmented with its match score. Serializes as the record's own
/// fields plus `matchScore`.
#[derive(Debug, Clone, Serialize)]
pub struct Ranked<T> {
    #[serde(flatten)]
    pub record: T,
    #[serde(rename = "matchScore")]
    pub match_score: u32,
}

/// Scores `items` in parallel, sorts descending by score (ties keep input order)
/// and keeps at most `limit` results.
pub fn rank_by<T, F>(items: Vec<T>, limit: Option<usize>, score_fn: F) -> Vec<Ranked<T>>
where
    T: Send,
    F: Fn(&T) -> u32 + Sync + Send,
{
    let mut ranked: Vec<Ranked<T>> = items
        .into_par_iter()
        .map(|record| {
            let match_score = score_fn(&record);
            Ranked {
                record,
                match_score,
            }
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));

    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}

/// Job → candidates direction.
pub fn rank_candidates_for_job<C, J>(
    scorer: &dyn MatchScorer,
    job: &J,
    candidates: Vec<C>,
    limit: Option<usize>,
) -> Vec<Ranked<C>>
where
    C: CandidateSignals + Send,
    J: JobSignals + Sync,
{
    rank_by(candidates, limit, |candidate| scorer.score(candidate, job))
}

/// Candidate → jobs direction.
pub fn rank_jobs_for_candidate<C, J>(
    scorer: &dyn MatchScorer,
    candidate: &C,
    jobs: Vec<J>,
    limit: Option<usize>,
) -> Vec<Ranked<J>>
where
    C: CandidateSignals + Sync,
    J: JobSignals + Send,
{
    rank_by(jobs, limit, |job| scorer.score(candidate, job))
}
