//! AI heuristics — resume analysis and interview question generation.
//!
//! `TalentAi` is the backend seam; `AppState` holds an `Arc<dyn TalentAi>`.
//! The default `HeuristicTalentAi` is keyword/bank based and draws every random
//! choice from one seeded RNG it owns, so a fixed `AI_RNG_SEED` replays exactly.

pub mod handlers;
pub mod questions;
pub mod resume;

use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::ai::questions::{generate_questions, Difficulty, InterviewQuestion};
use crate::ai::resume::{ResumeAnalysis, ResumeAnalyzer};
use crate::errors::AppError;

#[async_trait]
pub trait TalentAi: Send + Sync {
    async fn analyze_resume(&self, resume_text: &str) -> Result<ResumeAnalysis, AppError>;

    async fn generate_questions(
        &self,
        job_title: &str,
        skills: &[String],
        difficulty: Difficulty,
    ) -> Result<Vec<InterviewQuestion>, AppError>;
}

pub struct HeuristicTalentAi {
    analyzer: ResumeAnalyzer,
    rng: Mutex<StdRng>,
}

impl HeuristicTalentAi {
    /// `seed = None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> Result<Self> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            analyzer: ResumeAnalyzer::new()?,
            rng: Mutex::new(rng),
        })
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> Result<T, AppError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| AppError::Internal(anyhow!("AI rng mutex poisoned")))?;
        Ok(f(&mut rng))
    }
}

#[async_trait]
impl TalentAi for HeuristicTalentAi {
    async fn analyze_resume(&self, resume_text: &str) -> Result<ResumeAnalysis, AppError> {
        let analysis = self.with_rng(|rng| self.analyzer.analyze(resume_text, rng))?;
        debug!(
            "resume analyzed: {} skills, {} years",
            analysis.skills.len(),
            analysis.experience
        );
        Ok(analysis)
    }

    async fn generate_questions(
        &self,
        job_title: &str,
        skills: &[String],
        difficulty: Difficulty,
    ) -> Result<Vec<InterviewQuestion>, AppError> {
        let questions = self.with_rng(|rng| generate_questions(skills, difficulty, rng))?;
        debug!(
            "generated {} {difficulty:?} questions for '{job_title}'",
            questions.len()
        );
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_seed_replays() {
        let a = HeuristicTalentAi::new(Some(7)).unwrap();
        let b = HeuristicTalentAi::new(Some(7)).unwrap();
        let skills = vec!["Python".to_string()];

        let qa = a.generate_questions("ML Engineer", &skills, Difficulty::Mid).await.unwrap();
        let qb = b.generate_questions("ML Engineer", &skills, Difficulty::Mid).await.unwrap();
        assert_eq!(qa, qb);

        let ra = a.analyze_resume("no stated tenure").await.unwrap();
        let rb = b.analyze_resume("no stated tenure").await.unwrap();
        assert_eq!(ra.experience, rb.experience);
    }

    #[tokio::test]
    async fn test_entropy_seed_still_works() {
        let ai = HeuristicTalentAi::new(None).unwrap();
        let analysis = ai
            .analyze_resume("3 years of experience with SQL and React")
            .await
            .unwrap();
        assert_eq!(analysis.experience, 3);
        assert_eq!(analysis.skills, vec!["React", "SQL"]);
    }
}
