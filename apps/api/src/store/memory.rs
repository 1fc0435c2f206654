use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::status::StatusCheck;
use crate::models::user_skills::UserSkillsRecord;
use crate::store::DocumentStore;

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    // insertion order doubles as the listing order
    user_skills: RwLock<Vec<UserSkillsRecord>>,
    status_checks: RwLock<Vec<StatusCheck>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn upsert_user_skills(&self, record: &UserSkillsRecord) -> Result<(), AppError> {
        let mut records = self.user_skills.write().await;
        match records.iter_mut().find(|r| r.user_id == record.user_id) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
        Ok(())
    }

    async fn find_user_skills(&self, user_id: Uuid) -> Result<Option<UserSkillsRecord>, AppError> {
        Ok(self
            .user_skills
            .read()
            .await
            .iter()
            .find(|r| r.user_id == user_id)
            .cloned())
    }

    async fn list_user_skills(&self) -> Result<Vec<UserSkillsRecord>, AppError> {
        Ok(self.user_skills.read().await.clone())
    }

    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), AppError> {
        self.status_checks.write().await.push(check.clone());
        Ok(())
    }

    async fn list_status_checks(&self, limit: usize) -> Result<Vec<StatusCheck>, AppError> {
        Ok(self
            .status_checks
            .read()
            .await
            .iter()
            .take(limit)
            .cloned()
            .collect())
    }
}
