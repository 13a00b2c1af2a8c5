//! Camp repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use bloodshare_core::error::{AppError, ErrorKind};
use bloodshare_core::result::AppResult;
use bloodshare_entity::camp::{Camp, CampStatus, NewCamp};

use crate::store::CampStore;

/// Repository for blood donation camps.
#[derive(Debug, Clone)]
pub struct CampRepository {
    pool: PgPool,
}

impl CampRepository {
    /// Create a new camp repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CampStore for CampRepository {
    async fn list(&self, city: Option<&str>, status: Option<CampStatus>) -> AppResult<Vec<Camp>> {
        sqlx::query_as::<_, Camp>(
            "SELECT * FROM camps \
             WHERE ($1::TEXT IS NULL OR LOWER(city) = LOWER(TRIM($1))) \
               AND ($2::camp_status IS NULL OR status = $2) \
             ORDER BY date, created_at",
        )
        .bind(city)
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list camps", e))
    }

    async fn create(&self, camp: NewCamp) -> AppResult<Camp> {
        let camp = Camp::from_new(camp);
        sqlx::query_as::<_, Camp>(
            "INSERT INTO camps (id, title, organizer, date, time, location, city, \
             expected_donors, contact, description, status, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) RETURNING *",
        )
        .bind(camp.id)
        .bind(&camp.title)
        .bind(&camp.organizer)
        .bind(&camp.date)
        .bind(&camp.time)
        .bind(&camp.location)
        .bind(&camp.city)
        .bind(camp.expected_donors)
        .bind(&camp.contact)
        .bind(&camp.description)
        .bind(camp.status)
        .bind(camp.created_at)
        .bind(camp.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create camp", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Camp>> {
        sqlx::query_as::<_, Camp>("SELECT * FROM camps WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find camp", e))
    }

    async fn update_status(&self, id: Uuid, status: CampStatus) -> AppResult<Option<Camp>> {
        sqlx::query_as::<_, Camp>(
            "UPDATE camps SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update camp", e))
    }
}
