//! Document store seam for user skill records and status checks.
//!
//! `AppState` carries an `Arc<dyn DocumentStore>`: `PgStore` in production,
//! `MemoryStore` when no database is configured and in tests.
//! No transactional guarantees: concurrent upserts for one user resolve last-write-wins.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::status::StatusCheck;
use crate::models::user_skills::UserSkillsRecord;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Most status checks a single listing returns.
pub const STATUS_CHECK_LIMIT: usize = 1000;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts the record, or replaces every field of the existing one for the same user.
    async fn upsert_user_skills(&self, record: &UserSkillsRecord) -> Result<(), AppError>;

    async fn find_user_skills(&self, user_id: Uuid) -> Result<Option<UserSkillsRecord>, AppError>;

    async fn list_user_skills(&self) -> Result<Vec<UserSkillsRecord>, AppError>;

    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), AppError>;

    /// Oldest first, at most `limit` records.
    async fn list_status_checks(&self, limit: usize) -> Result<Vec<StatusCheck>, AppError>;
}
