//! Talent repository — read-only access to profiles and jobs.
//!
//! Matching only ever needs lookup-by-id and filter-by-predicate, so that is
//! the whole trait. `AppState` carries an `Arc<dyn TalentRepository>`.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::job::Job;
use crate::models::profile::Profile;

pub type ProfilePredicate<'a> = &'a (dyn Fn(&Profile) -> bool + Send + Sync);
pub type JobPredicate<'a> = &'a (dyn Fn(&Job) -> bool + Send + Sync);

#[async_trait]
pub trait TalentRepository: Send + Sync {
    async fn profile_by_id(&self, id: &str) -> Result<Option<Profile>>;

    async fn job_by_id(&self, id: &str) -> Result<Option<Job>>;

    /// Profiles satisfying `predicate`, in storage order.
    async fn profiles_where(&self, predicate: ProfilePredicate<'_>) -> Result<Vec<Profile>>;

    /// Jobs satisfying `predicate`, in storage order.
    async fn jobs_where(&self, predicate: JobPredicate<'_>) -> Result<Vec<Job>>;
}
