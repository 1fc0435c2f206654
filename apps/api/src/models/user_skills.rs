use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One user's saved skill selection. Always written whole; never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSkillsRecord {
    pub user_id: Uuid,
    pub user_email: String,
    pub skills: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl UserSkillsRecord {
    pub fn new(user_id: Uuid, user_email: impl Into<String>, skills: Vec<String>) -> Self {
        Self {
            user_id,
            user_email: user_email.into(),
            skills,
            updated_at: Utc::now(),
        }
    }
}

/// Database row for `user_skills`, including the internal surrogate key.
#[derive(Debug, Clone, FromRow)]
pub struct UserSkillsRow {
    /// Surrogate key; never exposed through the API.
    #[allow(dead_code)]
    pub id: i64,
    pub user_id: Uuid,
    pub user_email: String,
    pub skills: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserSkillsRow> for UserSkillsRecord {
    fn from(row: UserSkillsRow) -> Self {
        Self {
            user_id: row.user_id,
            user_email: row.user_email,
            skills: row.skills,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_serializes_camel_case_without_internal_id() {
        let user_id = Uuid::new_v4();
        let record = UserSkillsRecord::new(user_id, "a@b.co", vec!["Coding".into()]);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["userId"], json!(user_id.to_string()));
        assert_eq!(value["userEmail"], json!("a@b.co"));
        assert_eq!(value["skills"], json!(["Coding"]));
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_row_conversion_drops_surrogate_key() {
        let row = UserSkillsRow {
            id: 42,
            user_id: Uuid::new_v4(),
            user_email: "x@y.z".into(),
            skills: vec!["Design".into()],
            updated_at: Utc::now(),
        };
        let record = UserSkillsRecord::from(row.clone());
        assert_eq!(record.user_id, row.user_id);
        assert_eq!(record.skills, row.skills);
    }
}
