use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::status::StatusCheck;
use crate::models::user_skills::{UserSkillsRecord, UserSkillsRow};
use crate::store::DocumentStore;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn upsert_user_skills(&self, record: &UserSkillsRecord) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO user_skills (user_id, user_email, skills, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) DO UPDATE
            SET user_email = EXCLUDED.user_email,
                skills     = EXCLUDED.skills,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(record.user_id)
        .bind(&record.user_email)
        .bind(&record.skills)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_user_skills(&self, user_id: Uuid) -> Result<Option<UserSkillsRecord>, AppError> {
        let row: Option<UserSkillsRow> =
            sqlx::query_as("SELECT * FROM user_skills WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(UserSkillsRecord::from))
    }

    async fn list_user_skills(&self) -> Result<Vec<UserSkillsRecord>, AppError> {
        let rows: Vec<UserSkillsRow> = sqlx::query_as("SELECT * FROM user_skills ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(UserSkillsRecord::from).collect())
    }

    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), AppError> {
        sqlx::query(r#"INSERT INTO status_checks (id, client_name, "timestamp") VALUES ($1, $2, $3)"#)
            .bind(check.id)
            .bind(&check.client_name)
            .bind(check.timestamp)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_status_checks(&self, limit: usize) -> Result<Vec<StatusCheck>, AppError> {
        Ok(sqlx::query_as::<_, StatusCheck>(
            r#"SELECT id, client_name, "timestamp" FROM status_checks ORDER BY "timestamp" ASC LIMIT $1"#,
        )
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?)
    }
}
