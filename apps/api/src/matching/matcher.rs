//! Matcher: filters the job catalog down to jobs sharing a tag with the user's skills,
//! ordered by how many tags they share.
//!
//! Ties keep catalog order, so the sort must stay stable (`sort_by_key` is).

use std::cmp::Reverse;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::catalog::Job;

/// Which job types to keep. Compared against `JobType::normalized()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Permanent,
    PartTime,
    OneTime,
}

impl TypeFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Permanent => "permanent",
            TypeFilter::PartTime => "parttime",
            TypeFilter::OneTime => "onetime",
        }
    }

    fn accepts(self, job: &Job) -> bool {
        self == TypeFilter::All || job.job_type.normalized() == self.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTypeFilter(pub String);

impl fmt::Display for UnknownTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown job type '{}': expected one of all, permanent, parttime, onetime",
            self.0
        )
    }
}

impl std::error::Error for UnknownTypeFilter {}

impl FromStr for TypeFilter {
    type Err = UnknownTypeFilter;

    /// Accepts filter names in any case, with or without hyphens ("Part-Time" == "parttime").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "").as_str() {
            "all" => Ok(TypeFilter::All),
            "permanent" => Ok(TypeFilter::Permanent),
            "parttime" => Ok(TypeFilter::PartTime),
            "onetime" => Ok(TypeFilter::OneTime),
            _ => Err(UnknownTypeFilter(s.to_string())),
        }
    }
}

impl Serialize for TypeFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A matched job together with the number of its tags found in the user's skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobMatch<'a> {
    #[serde(flatten)]
    pub job: &'a Job,
    #[serde(rename = "matchCount")]
    pub match_count: usize,
}

/// Returns jobs sharing at least one tag with `user_skills` that pass `filter`,
/// most shared tags first. An empty skill set matches nothing.
pub fn match_jobs<'a>(
    jobs: &'a [Job],
    user_skills: &[String],
    filter: TypeFilter,
) -> Vec<JobMatch<'a>> {
    if user_skills.is_empty() {
        return Vec::new();
    }

    let skills: HashSet<&str> = user_skills.iter().map(String::as_str).collect();

    let mut matches: Vec<JobMatch<'a>> = jobs
        .iter()
        .filter(|job| filter.accepts(job))
        .filter_map(|job| {
            let match_count = shared_tag_count(job, &skills);
            (match_count > 0).then_some(JobMatch { job, match_count })
        })
        .collect();

    matches.sort_by_key(|m| Reverse(m.match_count));
    matches
}

fn shared_tag_count(job: &Job, skills: &HashSet<&str>) -> usize {
    job.tags
        .iter()
        .filter(|tag| skills.contains(tag.as_str()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, JobType};

    fn job(id: u32, tags: &[&str], job_type: JobType) -> Job {
        Job {
            id,
            title: format!("Job {id}"),
            description: String::new(),
            category: "General".to_string(),
            job_type,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn ids(matches: &[JobMatch<'_>]) -> Vec<u32> {
        matches.iter().map(|m| m.job.id).collect()
    }

    #[test]
    fn test_empty_skills_match_nothing() {
        let catalog = Catalog::bundled().unwrap();
        for filter in [
            TypeFilter::All,
            TypeFilter::Permanent,
            TypeFilter::PartTime,
            TypeFilter::OneTime,
        ] {
            assert!(match_jobs(&catalog.jobs, &[], filter).is_empty());
        }
    }

    #[test]
    fn test_more_shared_tags_rank_first() {
        let jobs = vec![
            job(1, &["Coding"], JobType::Permanent),
            job(2, &["Coding", "Design"], JobType::PartTime),
        ];
        let result = match_jobs(&jobs, &skills(&["Coding", "Design"]), TypeFilter::All);
        assert_eq!(ids(&result), vec![2, 1]);
        assert_eq!(result[0].match_count, 2);
        assert_eq!(result[1].match_count, 1);
    }

    #[test]
    fn test_jobs_without_shared_tags_are_excluded() {
        let jobs = vec![
            job(1, &["Sales"], JobType::Permanent),
            job(2, &[], JobType::Permanent),
            job(3, &["Writing", "Sales"], JobType::Permanent),
        ];
        let result = match_jobs(&jobs, &skills(&["Writing"]), TypeFilter::All);
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let jobs = vec![
            job(5, &["Design"], JobType::OneTime),
            job(3, &["Coding"], JobType::Permanent),
            job(9, &["Coding", "Design"], JobType::Permanent),
            job(1, &["Design"], JobType::PartTime),
        ];
        let result = match_jobs(&jobs, &skills(&["Coding", "Design"]), TypeFilter::All);
        assert_eq!(ids(&result), vec![9, 5, 3, 1]);
    }

    #[test]
    fn test_type_filter_keeps_only_normalized_type() {
        let jobs = vec![
            job(1, &["Coding"], JobType::Permanent),
            job(2, &["Coding"], JobType::PartTime),
            job(3, &["Coding"], JobType::OneTime),
            job(4, &["Coding", "Design"], JobType::PartTime),
        ];
        let user = skills(&["Coding", "Design"]);
        assert_eq!(ids(&match_jobs(&jobs, &user, TypeFilter::PartTime)), vec![4, 2]);
        assert_eq!(ids(&match_jobs(&jobs, &user, TypeFilter::Permanent)), vec![1]);
        assert_eq!(ids(&match_jobs(&jobs, &user, TypeFilter::OneTime)), vec![3]);
    }

    #[test]
    fn test_every_match_shares_a_tag_over_bundled_catalog() {
        let catalog = Catalog::bundled().unwrap();
        let user = skills(&["Coding", "Writing", "Photography"]);
        let result = match_jobs(&catalog.jobs, &user, TypeFilter::All);
        assert!(!result.is_empty());
        for m in &result {
            assert!(m.job.tags.iter().any(|t| user.contains(t)));
        }
        assert!(result
            .windows(2)
            .all(|w| w[0].match_count >= w[1].match_count));
    }

    #[test]
    fn test_duplicate_user_skills_do_not_inflate_count() {
        let jobs = vec![job(1, &["Coding"], JobType::Permanent)];
        let result = match_jobs(&jobs, &skills(&["Coding", "Coding"]), TypeFilter::All);
        assert_eq!(result[0].match_count, 1);
    }

    #[test]
    fn test_type_filter_parsing_normalizes_input() {
        assert_eq!("all".parse::<TypeFilter>().unwrap(), TypeFilter::All);
        assert_eq!("Part-Time".parse::<TypeFilter>().unwrap(), TypeFilter::PartTime);
        assert_eq!("ONETIME".parse::<TypeFilter>().unwrap(), TypeFilter::OneTime);
        assert!("contract".parse::<TypeFilter>().is_err());
    }

    #[test]
    fn test_job_match_serializes_flat_with_match_count() {
        let j = job(2, &["Coding"], JobType::PartTime);
        let value = serde_json::to_value(JobMatch {
            job: &j,
            match_count: 1,
        })
        .unwrap();
        assert_eq!(value["id"], 2);
        assert_eq!(value["type"], "Part-Time");
        assert_eq!(value["matchCount"], 1);
    }
}
