use serde::{Deserialize, Serialize};

/// A candidate from the reference pool. Read-only during a pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: String,
    pub skills: Vec<String>,
    #[serde(rename = "exp")]
    pub experience_years: u32,
    #[serde(default)]
    pub location: String,
}

/// A candidate with its match score for one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub name: String,
    pub skills: Vec<String>,
    #[serde(rename = "exp")]
    pub experience_years: u32,
    pub location: String,
    /// 0 – 100
    #[serde(rename = "match")]
    pub match_score: u32,
}

impl ScoredCandidate {
    pub fn new(record: &CandidateRecord, match_score: u32) -> Self {
        Self {
            name: record.name.clone(),
            skills: record.skills.clone(),
            experience_years: record.experience_years,
            location: record.location.clone(),
            match_score,
        }
    }
}

fn record(name: &str, skills: &[&str], experience_years: u32, location: &str) -> CandidateRecord {
    CandidateRecord {
        name: name.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        experience_years,
        location: location.to_string(),
    }
}

/// Static mock pool standing in for a real sourcing backend.
pub fn sample_pool() -> Vec<CandidateRecord> {
    vec![
        record("Ankit Sharma", &["Java", "Spring Boot", "SQL"], 4, "Bangalore"),
        record("Priya Verma", &["Java", "Microservices", "Docker"], 5, "Bangalore"),
        record("Rahul Gupta", &["Python", "Django", "Postgres"], 3, "Hyderabad"),
        record("Sneha Joshi", &["Java", "Spring", "Kubernetes"], 6, "Pune"),
        record("Neha Singh", &["JavaScript", "React", "Node"], 4, "Bangalore"),
    ]
}
