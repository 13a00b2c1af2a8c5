//! Application state shared across all handlers.

use std::sync::Arc;
use std::time::Instant;

use bloodshare_core::config::AppConfig;
use bloodshare_database::store::{CampStore, DonorStore};
use bloodshare_messaging::Transports;
use bloodshare_service::{CampService, DonorService, EmergencyService, HospitalService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// When the server started.
    pub started_at: Instant,
    /// Donor registry.
    pub donor_service: Arc<DonorService>,
    /// Camp registry.
    pub camp_service: Arc<CampService>,
    /// Emergency broadcaster.
    pub emergency_service: Arc<EmergencyService>,
    /// Hospital lookup.
    pub hospital_service: Arc<HospitalService>,
}

impl AppState {
    /// Wire services over the given stores and transports.
    pub fn new(
        config: AppConfig,
        donors: Arc<dyn DonorStore>,
        camps: Arc<dyn CampStore>,
        transports: Transports,
    ) -> Self {
        let emergency_service = EmergencyService::new(
            Arc::clone(&donors),
            transports,
            config.emergency.clone(),
            config.messaging.whatsapp.default_country_code.clone(),
        );

        Self {
            donor_service: Arc::new(DonorService::new(donors)),
            camp_service: Arc::new(CampService::new(camps)),
            emergency_service: Arc::new(emergency_service),
            hospital_service: Arc::new(HospitalService::new()),
            started_at: Instant::now(),
            config: Arc::new(config),
        }
    }
}
