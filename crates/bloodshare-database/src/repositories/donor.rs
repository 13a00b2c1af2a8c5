//! Donor repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use bloodshare_core::error::{AppError, ErrorKind};
use bloodshare_core::result::AppResult;
use bloodshare_entity::donor::{CandidateFilter, Donor, DonorCandidate, NewDonor};

use crate::store::{DonorQuery, DonorStore};

const CANDIDATE_COLUMNS: &str = "id, full_name, blood_group, phone_number, email, city, \
     is_approved, emergency_availability";

/// Repository for donor records.
#[derive(Debug, Clone)]
pub struct DonorRepository {
    pool: PgPool,
}

impl DonorRepository {
    /// Create a new donor repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DonorStore for DonorRepository {
    async fn find_candidates(&self, filter: &CandidateFilter) -> AppResult<Vec<DonorCandidate>> {
        let sql = format!(
            "SELECT {CANDIDATE_COLUMNS} FROM donors \
             WHERE is_approved = $1 \
               AND ($2::BOOLEAN IS NULL OR emergency_availability = $2) \
               AND ($3::TEXT IS NULL OR LOWER(city) = LOWER(TRIM($3))) \
             ORDER BY created_at"
        );
        sqlx::query_as::<_, DonorCandidate>(&sql)
            .bind(filter.approved)
            .bind(filter.emergency_available)
            .bind(filter.city.as_deref())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to query candidates", e))
    }

    async fn create(&self, donor: NewDonor) -> AppResult<Donor> {
        let donor = Donor::from_new(donor);
        sqlx::query_as::<_, Donor>(
            "INSERT INTO donors (id, wallet_address, full_name, age, blood_group, city, email, \
             phone_number, emergency_contact, medical_condition, emergency_availability, \
             is_approved, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) RETURNING *",
        )
        .bind(donor.id)
        .bind(&donor.wallet_address)
        .bind(&donor.full_name)
        .bind(donor.age)
        .bind(donor.blood_group)
        .bind(&donor.city)
        .bind(&donor.email)
        .bind(&donor.phone_number)
        .bind(&donor.emergency_contact)
        .bind(&donor.medical_condition)
        .bind(donor.emergency_availability)
        .bind(donor.is_approved)
        .bind(donor.created_at)
        .bind(donor.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let duplicate = e
                .as_database_error()
                .is_some_and(|db| db.is_unique_violation());
            if duplicate {
                AppError::conflict(format!("A donor with email '{}' already exists", donor.email))
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to create donor", e)
            }
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Donor>> {
        sqlx::query_as::<_, Donor>("SELECT * FROM donors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find donor", e))
    }

    async fn list(&self, query: &DonorQuery) -> AppResult<Vec<Donor>> {
        sqlx::query_as::<_, Donor>(
            "SELECT * FROM donors \
             WHERE ($1::BOOLEAN IS NULL OR is_approved = $1) \
               AND ($2::blood_group IS NULL OR blood_group = $2) \
               AND ($3::TEXT IS NULL OR LOWER(city) = LOWER(TRIM($3))) \
             ORDER BY created_at DESC",
        )
        .bind(query.approved)
        .bind(query.blood_group)
        .bind(query.city.as_deref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list donors", e))
    }

    async fn set_approved(&self, id: Uuid, approved: bool) -> AppResult<Option<Donor>> {
        sqlx::query_as::<_, Donor>(
            "UPDATE donors SET is_approved = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(approved)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update approval", e))
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}
