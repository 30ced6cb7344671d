//! Match Scoring — compatibility of one candidate with one job, as an integer 0–100.
//!
//! Default: `HeuristicMatchScorer` (skill overlap + experience fit + location bonus).
//! `AppState` holds an `Arc<dyn MatchScorer>`, so ranking and handlers never name
//! the concrete backend.

use serde::{Deserialize, Serialize};

use crate::models::job::Job;
use crate::models::profile::Profile;

pub const SKILL_WEIGHT: f64 = 0.6;
pub const EXPERIENCE_WEIGHT: f64 = 0.3;
pub const LOCATION_BONUS: f64 = 0.1;

/// Experience fit never drops below this for over-qualified candidates.
pub const OVER_EXPERIENCE_FLOOR: f64 = 0.5;

// ────────────────────────────────────────────────────────────────────────────
// Scoring inputs
// ────────────────────────────────────────────────────────────────────────────

/// What the scorer reads from a candidate.
pub trait CandidateSignals {
    fn candidate_id(&self) -> &str;
    fn skills(&self) -> &[String];
    fn experience_years(&self) -> u32;
    fn location(&self) -> Option<&str>;
}

/// What the scorer reads from a job.
pub trait JobSignals {
    fn job_id(&self) -> &str;
    fn required_skills(&self) -> &[String];
    fn experience_min(&self) -> u32;
    fn experience_max(&self) -> u32;
    fn location(&self) -> Option<&str>;
    fn remote_allowed(&self) -> bool;
}

impl CandidateSignals for Profile {
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

impl JobSignals for Job {
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
// Output
// ────────────────────────────────────────────────────────────────────────────

/// A score together with the components it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub candidate_id: String,
    pub job_id: String,
    pub score: u32, // 0 – 100
    pub skill_ratio: f64,
    pub experience_fit: f64,
    pub location_bonus: f64,
    /// Candidate skills (original spelling) that hit at least one requirement.
    pub matched_skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Pluggable match scorer. Must stay pure: ranking calls it from a rayon pool.
pub trait MatchScorer: Send + Sync {
    fn explain(&self, candidate: &dyn CandidateSignals, job: &dyn JobSignals) -> MatchBreakdown;

    fn score(&self, candidate: &dyn CandidateSignals, job: &dyn JobSignals) -> u32 {
        self.explain(candidate, job).score
    }
}

/// Keyword/heuristic scorer. Deterministic, no I/O.
///
/// Algorithm:
/// 1. skill_ratio = matching candidate skills / required job skills (0 when none required)
/// 2. experience_fit = piecewise fit of years against [min, max]
/// 3. location_bonus = 0.1 on same location or remote-friendly job
/// 4. score = clamp(round((0.6·skill_ratio + 0.3·experience_fit + location_bonus) · 100))
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicMatchScorer;

impl MatchScorer for HeuristicMatchScorer {
    fn explain(&self, candidate: &dyn CandidateSignals, job: &dyn JobSignals) -> MatchBreakdown {
        explain(candidate, job)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

pub fn explain(candidate: &dyn CandidateSignals, job: &dyn JobSignals) -> MatchBreakdown {
    let matched_skills = matching_skills(candidate.skills(), job.required_skills());
    let skill_ratio = skill_match_ratio(matched_skills.len(), job.required_skills().len());
    let experience_fit = experience_fit(
        candidate.experience_years(),
        job.experience_min(),
        job.experience_max(),
    );
    let location_bonus = location_bonus(candidate, job);

    let raw = (skill_ratio * SKILL_WEIGHT + experience_fit * EXPERIENCE_WEIGHT + location_bonus)
        * 100.0;

    MatchBreakdown {
        candidate_id: candidate.candidate_id().to_string(),
        job_id: job.job_id().to_string(),
        score: raw.round().clamp(0.0, 100.0) as u32,
        skill_ratio,
        experience_fit,
        location_bonus,
        matched_skills,
    }
}

/// Candidate skills matching at least one required skill, case-insensitively,
/// where either string containing the other counts ("java" hits "javascript").
fn matching_skills(candidate_skills: &[String], required_skills: &[String]) -> Vec<String> {
    let required: Vec<String> = required_skills.iter().map(|s| s.to_lowercase()).collect();

    candidate_skills
        .iter()
        .filter(|skill| {
            let skill = skill.to_lowercase();
            required
                .iter()
                .any(|req| req.contains(skill.as_str()) || skill.contains(req.as_str()))
        })
        .cloned()
        .collect()
}

/// No stated requirement is treated as no evidence of fit.
fn skill_match_ratio(matched: usize, required: usize) -> f64 {
    if required == 0 {
        return 0.0;
    }
    matched as f64 / required as f64
}

pub fn experience_fit(years: u32, min: u32, max: u32) -> f64 {
    if (min..=max).contains(&years) {
        1.0
    } else if years < min {
        if min == 0 {
            1.0
        } else {
            f64::from(years) / f64::from(min)
        }
    } else if max == 0 {
        OVER_EXPERIENCE_FLOOR
    } else {
        let over = f64::from(years - max) / f64::from(max);
        (1.0 - over).max(OVER_EXPERIENCE_FLOOR)
    }
}

/// Two missing locations compare equal, so they earn the bonus too.
fn location_bonus(candidate: &dyn CandidateSignals, job: &dyn JobSignals) -> f64 {
    if job.remote_allowed() || candidate.location() == job.location() {
        LOCATION_BONUS
    } else {
        0.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
