use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Draft,
    Active,
    Paused,
    Closed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub company_id: String,
    pub recruiter_id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub skills_required: Vec<String>,
    pub experience_min: u32,
    pub experience_max: u32,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub location: Option<String>,
    pub remote_allowed: bool,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn is_active(&self) -> bool {
        self.status == JobStatus::Active
    }
}
