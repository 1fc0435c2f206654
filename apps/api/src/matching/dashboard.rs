use serde::Serialize;

use crate::catalog::{Job, Skill};
use crate::models::user_skills::UserSkillsRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillFrequency {
    pub skill: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDemand {
    pub category: String,
    pub count: usize,
}

/// Number of users holding each catalog skill, in catalog order.
/// Skills nobody holds are reported with a count of zero.
pub fn skill_frequency(skills: &[Skill], users: &[UserSkillsRecord]) -> Vec<SkillFrequency> {
    skills
        .iter()
        .map(|skill| SkillFrequency {
            skill: skill.name.clone(),
            count: users
                .iter()
                .filter(|u| u.skills.iter().any(|s| *s == skill.name))
                .count(),
        })
        .collect()
}

/// Number of jobs per category, in first-seen order. Only categories that occur are listed.
pub fn job_demand(jobs: &[Job]) -> Vec<CategoryDemand> {
    let mut demand: Vec<CategoryDemand> = Vec::new();
    for job in jobs {
        match demand.iter_mut().find(|d| d.category == job.category) {
            Some(entry) => entry.count += 1,
            None => demand.push(CategoryDemand {
                category: job.category.clone(),
                count: 1,
            }),
        }
    }
    demand
}
