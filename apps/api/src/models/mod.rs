pub mod status;
pub mod user_skills;
