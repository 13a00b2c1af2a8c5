//! Camp scheduling and lifecycle.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use bloodshare_core::error::AppError;
use bloodshare_database::store::CampStore;
use bloodshare_entity::camp::{Camp, CampStatus, NewCamp};
use bloodshare_entity::validation::into_app_error;

/// Manages blood donation camps.
#[derive(Debug, Clone)]
pub struct CampService {
    camps: Arc<dyn CampStore>,
}

impl CampService {
    /// Creates a new camp service.
    pub fn new(camps: Arc<dyn CampStore>) -> Self {
        Self { camps }
    }

    /// Camps ordered by date, optionally narrowed by city and status.
    pub async fn list(
        &self,
        city: Option<&str>,
        status: Option<CampStatus>,
    ) -> Result<Vec<Camp>, AppError> {
        let city = city.map(str::trim).filter(|c| !c.is_empty());
        self.camps.list(city, status).await
    }

    /// Schedule a new camp.
    pub async fn create(&self, mut new_camp: NewCamp) -> Result<Camp, AppError> {
        new_camp.validate().map_err(into_app_error)?;

        for field in [
            &mut new_camp.title,
            &mut new_camp.organizer,
            &mut new_camp.date,
            &mut new_camp.time,
            &mut new_camp.location,
            &mut new_camp.city,
            &mut new_camp.contact,
        ] {
            *field = field.trim().to_string();
        }
        new_camp.description = new_camp
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        let camp = self.camps.create(new_camp).await?;
        info!(camp_id = %camp.id, city = %camp.city, date = %camp.date, "Camp scheduled");
        Ok(camp)
    }

    /// Mark a camp as completed. Completing a completed camp is a no-op.
    pub async fn complete(&self, id: Uuid) -> Result<Camp, AppError> {
        let camp = self
            .camps
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Camp not found."))?;

        if camp.status == CampStatus::Completed {
            return Ok(camp);
        }

        let camp = self
            .camps
            .update_status(id, CampStatus::Completed)
            .await?
            .ok_or_else(|| AppError::not_found("Camp not found."))?;

        info!(camp_id = %id, "Camp completed");
        Ok(camp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloodshare_core::error::ErrorKind;
    use bloodshare_database::memory::MemoryCampStore;

    fn new_camp(city: &str, date: &str) -> NewCamp {
        NewCamp {
            title: " Mega Blood Drive ".to_string(),
            organizer: "Rotary Club".to_string(),
            date: date.to_string(),
            time: "9:00 AM - 5:00 PM".to_string(),
            location: "Andheri Sports Complex".to_string(),
            city: city.to_string(),
            expected_donors: 200,
            contact: "9876543210".to_string(),
            description: Some(String::new()),
        }
    }

    fn service() -> CampService {
        CampService::new(Arc::new(MemoryCampStore::new()))
    }

    #[tokio::test]
    async fn test_create_trims_and_lists_by_date() {
        let svc = service();
        svc.create(new_camp("Mumbai", "2026-12-01")).await.unwrap();
        let first = svc.create(new_camp("Mumbai", "2026-11-15")).await.unwrap();
        svc.create(new_camp("Delhi", "2026-11-20")).await.unwrap();

        assert_eq!(first.title, "Mega Blood Drive");
        assert!(first.description.is_none());
        assert_eq!(first.status, CampStatus::Upcoming);

        let mumbai = svc.list(Some(" mumbai "), None).await.unwrap();
        assert_eq!(mumbai.len(), 2);
        assert_eq!(mumbai[0].id, first.id);
        assert_eq!(svc.list(Some(""), None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_create_rejects_bad_input() {
        let mut camp = new_camp("Pune", "next week");
        camp.expected_donors = 0;
        let err = service().create(camp).await.unwrap_err();
        assert!(err.is(ErrorKind::Validation));
        assert!(err.message.contains("date"));
        assert!(err.message.contains("expected_donors"));
    }

    #[tokio::test]
    async fn test_complete_is_idempotent() {
        let svc = service();
        let camp = svc.create(new_camp("Pune", "2026-11-02")).await.unwrap();

        let done = svc.complete(camp.id).await.unwrap();
        assert_eq!(done.status, CampStatus::Completed);
        let again = svc.complete(camp.id).await.unwrap();
        assert_eq!(again.status, CampStatus::Completed);

        let upcoming = svc.list(None, Some(CampStatus::Upcoming)).await.unwrap();
        assert!(upcoming.is_empty());
    }

    #[tokio::test]
    async fn test_complete_unknown_camp() {
        let err = service().complete(Uuid::new_v4()).await.unwrap_err();
        assert!(err.is(ErrorKind::NotFound));
    }
}
