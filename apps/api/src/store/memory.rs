use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::models::job::Job;
use crate::models::profile::Profile;
use crate::store::{JobPredicate, ProfilePredicate, TalentRepository};

/// Demo dataset compiled into the binary; replaced at startup by `SEED_DATA_PATH`.
const EMBEDDED_SEED: &str = include_str!("../../data/seed.json");

#[derive(Debug, Deserialize)]
struct SeedData {
    #[serde(default)]
    profiles: Vec<Profile>,
    #[serde(default)]
    jobs: Vec<Job>,
}

/// Immutable in-memory repository. Loaded once, then shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    profiles: Vec<Profile>,
    jobs: Vec<Job>,
}

impl InMemoryStore {
    pub fn new(profiles: Vec<Profile>, jobs: Vec<Job>) -> Self {
        Self { profiles, jobs }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let seed: SeedData = serde_json::from_str(json).context("Seed data is not valid JSON")?;
        Ok(Self::new(seed.profiles, seed.jobs))
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_SEED)
    }

    /// Loads seed data from `path`, or the embedded dataset when no path is configured.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let store = match path {
            Some(path) => {
                let json = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read seed data from {}", path.display()))?;
                Self::from_json(&json)?
            }
            None => Self::embedded()?,
        };

        info!(
            "Talent store loaded: {} profiles, {} jobs",
            store.profiles.len(),
            store.jobs.len()
        );
        Ok(store)
    }
}

#[async_trait]
impl TalentRepository for InMemoryStore {
    async fn profile_by_id(&self, id: &str) -> Result<Option<Profile>> {
        Ok(self.profiles.iter().find(|p| p.id == id).cloned())
    }

    async fn job_by_id(&self, id: &str) -> Result<Option<Job>> {
        Ok(self.jobs.iter().find(|j| j.id == id).cloned())
    }

    async fn profiles_where(&self, predicate: ProfilePredicate<'_>) -> Result<Vec<Profile>> {
        Ok(self
            .profiles
            .iter()
            .filter(|&p| predicate(p))
            .cloned()
            .collect())
    }

    async fn jobs_where(&self, predicate: JobPredicate<'_>) -> Result<Vec<Job>> {
        Ok(self.jobs.iter().filter(|&j| predicate(j)).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::Role;

    #[tokio::test]
    async fn test_embedded_seed_parses() {
        let store = InMemoryStore::embedded().unwrap();
        assert_eq!(store.profiles.len(), 8);
        assert_eq!(store.jobs.len(), 6);
    }

    #[tokio::test]
    async fn test_lookup_by_id() {
        let store = InMemoryStore::embedded().unwrap();

        let job = store.job_by_id("job-4").await.unwrap().unwrap();
        assert_eq!(job.title, "MLOps Engineer");

        let profile = store.profile_by_id("candidate-2").await.unwrap().unwrap();
        assert_eq!(profile.role, Role::Candidate);
        assert_eq!(profile.experience_years, 5);
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let store = InMemoryStore::embedded().unwrap();
        assert!(store.job_by_id("job-404").await.unwrap().is_none());
        assert!(store.profile_by_id("").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_filters_preserve_storage_order() {
        let store = InMemoryStore::embedded().unwrap();

        let available = store
            .profiles_where(&|p: &Profile| p.is_available_candidate())
            .await
            .unwrap();
        let ids: Vec<&str> = available.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["candidate-1", "candidate-2", "candidate-4", "candidate-5"]
        );

        let active = store.jobs_where(&|j: &Job| j.is_active()).await.unwrap();
        assert_eq!(active.len(), 5);
        assert!(active.iter().all(|j| j.id != "job-6"));
    }

    #[tokio::test]
    async fn test_load_without_path_uses_embedded() {
        let store = InMemoryStore::load(None).await.unwrap();
        assert_eq!(store.jobs.len(), 6);
    }

    #[tokio::test]
    async fn test_load_missing_file_errors() {
        let err = InMemoryStore::load(Some(Path::new("/definitely/not/here.json")))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read seed data"));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(InMemoryStore::from_json("{ not json").is_err());
    }

    #[test]
    fn test_from_json_defaults_missing_sections() {
        let store = InMemoryStore::from_json("{}").unwrap();
        assert!(store.profiles.is_empty());
        assert!(store.jobs.is_empty());
    }
}
