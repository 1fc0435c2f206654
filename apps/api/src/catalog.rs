//! Static skill and job catalogs bundled with the binary.
//!
//! Both lists are parsed once at startup and shared read-only through `AppState`.
//! Job tags refer to skills by name only; a tag with no matching skill is logged, not rejected.

use std::collections::HashSet;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

const SKILLS_JSON: &str = include_str!("../data/skills.json");
const JOBS_JSON: &str = include_str!("../data/jobs.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    Permanent,
    #[serde(rename = "Part-Time")]
    PartTime,
    #[serde(rename = "One-Time")]
    OneTime,
}

impl JobType {
    /// Display label as it appears in the catalog.
    pub fn label(self) -> &'static str {
        match self {
            JobType::Permanent => "Permanent",
            JobType::PartTime => "Part-Time",
            JobType::OneTime => "One-Time",
        }
    }

    /// Lowercased label with hyphens removed, the form type filters compare against.
    pub fn normalized(self) -> String {
        self.label().to_lowercase().replace('-', "")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub skills: Vec<Skill>,
    pub jobs: Vec<Job>,
}

impl Catalog {
    /// Parses the catalogs embedded at build time.
    pub fn bundled() -> Result<Self> {
        let catalog = Self::from_json(SKILLS_JSON, JOBS_JSON)?;
        info!(
            "Catalog loaded: {} skills, {} jobs",
            catalog.skills.len(),
            catalog.jobs.len()
        );
        Ok(catalog)
    }

    pub fn from_json(skills_json: &str, jobs_json: &str) -> Result<Self> {
        let skills: Vec<Skill> =
            serde_json::from_str(skills_json).context("skill catalog is not valid JSON")?;
        let jobs: Vec<Job> =
            serde_json::from_str(jobs_json).context("job catalog is not valid JSON")?;

        let catalog = Self { skills, jobs };
        for (job_id, tag) in catalog.unknown_tags() {
            warn!("Job {job_id} is tagged with '{tag}', which is not in the skill catalog");
        }
        Ok(catalog)
    }

    /// Job tags that name no skill in the catalog, as `(job_id, tag)` pairs.
    pub fn unknown_tags(&self) -> Vec<(u32, &str)> {
        let known: HashSet<&str> = self.skills.iter().map(|s| s.name.as_str()).collect();
        let known = &known;
        self.jobs
            .iter()
            .flat_map(move |job| {
                job.tags
                    .iter()
                    .filter(move |tag| !known.contains(tag.as_str()))
                    .map(move |tag| (job.id, tag.as_str()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.skills.is_empty());
        assert!(!catalog.jobs.is_empty());
    }

    #[test]
    fn test_bundled_job_tags_all_reference_known_skills() {
        let catalog = Catalog::bundled().unwrap();
        assert!(catalog.unknown_tags().is_empty());
    }

    #[test]
    fn test_bundled_catalog_covers_trade_skills() {
        let catalog = Catalog::bundled().unwrap();
        for trade in ["Carpentry", "Plumbing", "Electrical Work", "Painting"] {
            assert!(
                catalog.skills.iter().any(|s| s.name == trade),
                "missing skill {trade}"
            );
            assert!(
                catalog.jobs.iter().any(|j| j.tags.iter().any(|t| t == trade)),
                "no job tagged {trade}"
            );
        }
    }

    #[test]
    fn test_bundled_ids_are_unique() {
        let catalog = Catalog::bundled().unwrap();
        let skill_ids: HashSet<u32> = catalog.skills.iter().map(|s| s.id).collect();
        let job_ids: HashSet<u32> = catalog.jobs.iter().map(|j| j.id).collect();
        assert_eq!(skill_ids.len(), catalog.skills.len());
        assert_eq!(job_ids.len(), catalog.jobs.len());
    }

    #[test]
    fn test_job_type_deserializes_from_catalog_labels() {
        let job: Job = serde_json::from_str(
            r#"{"id":1,"title":"t","description":"d","category":"c","type":"Part-Time","tags":[]}"#,
        )
        .unwrap();
        assert_eq!(job.job_type, JobType::PartTime);
    }

    #[test]
    fn test_job_type_normalization_strips_hyphens() {
        assert_eq!(JobType::Permanent.normalized(), "permanent");
        assert_eq!(JobType::PartTime.normalized(), "parttime");
        assert_eq!(JobType::OneTime.normalized(), "onetime");
    }

    #[test]
    fn test_unknown_tags_reported_not_rejected() {
        let catalog = Catalog::from_json(
            r#"[{"id":1,"name":"Coding"}]"#,
            r#"[{"id":7,"title":"t","description":"d","category":"c","type":"Permanent","tags":["Coding","Juggling"]}]"#,
        )
        .unwrap();
        assert_eq!(catalog.unknown_tags(), vec![(7, "Juggling")]);
    }

    #[test]
    fn test_invalid_catalog_json_is_an_error() {
        assert!(Catalog::from_json("not json", "[]").is_err());
    }

    #[test]
    fn test_missing_tags_default_to_empty() {
        let job: Job = serde_json::from_str(
            r#"{"id":1,"title":"t","description":"d","category":"c","type":"One-Time"}"#,
        )
        .unwrap();
        assert!(job.tags.is_empty());
    }
}
