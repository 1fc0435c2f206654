// Job matching and dashboard aggregation.
// Pure functions over the catalogs and stored skill records; no I/O here.

pub mod dashboard;
pub mod matcher;

pub use dashboard::{job_demand, skill_frequency, CategoryDemand, SkillFrequency};
pub use matcher::{match_jobs, JobMatch, TypeFilter};
