use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Candidate,
    Recruiter,
    Admin,
}

/// A platform user. Candidates carry the skill and experience data the matcher reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub role: Role,
    pub email: String,
    pub full_name: String,
    pub avatar_url: Option<String>,
    pub github_username: Option<String>,
    pub linkedin_url: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: u32,
    pub availability: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Candidates open to new roles; the pool searched when matching a job.
    pub fn is_available_candidate(&self) -> bool {
        self.role == Role::Candidate && self.availability
    }
}
