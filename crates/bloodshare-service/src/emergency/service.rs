//! Emergency fan-out: select candidates, notify each one on both
//! channels, and reduce the outcomes into one result.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{info, warn};
use validator::Validate;

use bloodshare_core::config::EmergencyConfig;
use bloodshare_core::error::AppError;
use bloodshare_database::store::DonorStore;
use bloodshare_entity::blood_type::{BloodType, compatible_donor_types, join_types};
use bloodshare_entity::donor::{CandidateFilter, DonorCandidate};
use bloodshare_entity::emergency::{
    Channel, EmergencyRequest, EmergencyResult, NotificationOutcome,
};
use bloodshare_entity::validation::into_app_error;
use bloodshare_messaging::phone::{format_for_transport, mask};
use bloodshare_messaging::template::{RenderedMessage, TEST_MESSAGE};
use bloodshare_messaging::{DeliveryError, DeliveryReceipt, Transports};

use super::error::EmergencyError;

/// Broadcasts emergency blood requests to donors.
#[derive(Debug, Clone)]
pub struct EmergencyService {
    /// Donor storage.
    donors: Arc<dyn DonorStore>,
    /// WhatsApp and email transports.
    transports: Transports,
    /// Candidate policy and concurrency bound.
    config: EmergencyConfig,
    /// Country code for bare local numbers.
    country_code: String,
}

impl EmergencyService {
    /// Creates a new emergency service.
    pub fn new(
        donors: Arc<dyn DonorStore>,
        transports: Transports,
        config: EmergencyConfig,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            donors,
            transports,
            config,
            country_code: country_code.into(),
        }
    }

    /// Validate a request, select candidates with the configured policy,
    /// and notify them.
    pub async fn broadcast(
        &self,
        request: &EmergencyRequest,
    ) -> Result<EmergencyResult, EmergencyError> {
        request.validate().map_err(into_app_error)?;

        let filter = CandidateFilter::for_policy(self.config.filter, &request.city);
        let candidates = self.donors.find_candidates(&filter).await?;

        info!(
            blood_group = %request.blood_group,
            city = %request.city,
            urgency = %request.urgency_level,
            policy = ?self.config.filter,
            candidates = candidates.len(),
            "Emergency request received"
        );

        self.notify_donors(request, candidates).await
    }

    /// Notify every candidate on both channels and aggregate the outcomes.
    ///
    /// Each dispatch is isolated: a failure on one channel or for one
    /// candidate never prevents any other attempt. Calling this twice
    /// sends twice.
    pub async fn notify_donors(
        &self,
        request: &EmergencyRequest,
        candidates: Vec<DonorCandidate>,
    ) -> Result<EmergencyResult, EmergencyError> {
        let compatible_types = compatible_donor_types(request.blood_group);

        if candidates.is_empty() {
            warn!(blood_group = %request.blood_group, "No candidates for emergency request");
            return Err(EmergencyError::NoCandidates(Box::new(
                EmergencyResult::empty(compatible_types.to_vec()),
            )));
        }

        let total = candidates.len();
        let limit = self.config.max_concurrent_dispatches.max(1);

        let mut settled: Vec<(usize, [NotificationOutcome; 2])> = stream::iter(
            candidates.into_iter().enumerate(),
        )
        .map(|(index, candidate)| async move {
            (index, self.dispatch(request, &candidate, compatible_types).await)
        })
        .buffer_unordered(limit)
        .collect()
        .await;
        settled.sort_by_key(|(index, _)| *index);

        let outcomes = settled.into_iter().flat_map(|(_, pair)| pair).collect();
        let result = EmergencyResult::from_outcomes(total, compatible_types.to_vec(), outcomes);

        info!(
            blood_group = %request.blood_group,
            candidates = total,
            whatsapp_ok = result.whatsapp.succeeded,
            whatsapp_failed = result.whatsapp.failed,
            email_ok = result.email.succeeded,
            email_failed = result.email.failed,
            compatible_notified = result.compatible_donors_notified,
            general_notified = result.general_donors_notified,
            compatible_groups = %join_types(compatible_types),
            "Emergency broadcast complete"
        );

        if result.all_failed() {
            return Err(EmergencyError::AllDeliveriesFailed(Box::new(result)));
        }
        Ok(result)
    }

    /// Send the fixed test message to one phone number over WhatsApp.
    pub async fn send_test_message(&self, phone: &str) -> Result<DeliveryReceipt, AppError> {
        let to = format_for_transport(phone, &self.country_code)?;
        let receipt = self.transports.whatsapp.send(&to, TEST_MESSAGE).await?;
        info!(to = %mask(phone), message_id = %receipt.id, "Test message sent");
        Ok(receipt)
    }

    /// Whether each channel is able to deliver: `(whatsapp, email)`.
    pub fn channels_enabled(&self) -> (bool, bool) {
        (
            self.transports.whatsapp.is_enabled(),
            self.transports.email.is_enabled(),
        )
    }

    async fn dispatch(
        &self,
        request: &EmergencyRequest,
        candidate: &DonorCandidate,
        compatible_types: &[BloodType],
    ) -> [NotificationOutcome; 2] {
        let compatible = compatible_types.contains(&candidate.blood_group);
        let message =
            RenderedMessage::for_donor(request, candidate.blood_group, compatible, compatible_types);

        let (whatsapp, email) = futures::join!(
            self.send_whatsapp(candidate, &message.text),
            self.transports
                .email
                .send(&candidate.email, &message.subject, &message.html),
        );

        [
            record(candidate, Channel::WhatsApp, compatible, whatsapp),
            record(candidate, Channel::Email, compatible, email),
        ]
    }

    async fn send_whatsapp(
        &self,
        candidate: &DonorCandidate,
        body: &str,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        let to = format_for_transport(&candidate.phone_number, &self.country_code)?;
        self.transports.whatsapp.send(&to, body).await
    }
}

fn record(
    candidate: &DonorCandidate,
    channel: Channel,
    compatible: bool,
    result: Result<DeliveryReceipt, DeliveryError>,
) -> NotificationOutcome {
    match result {
        Ok(receipt) => {
            info!(
                donor_id = %candidate.id,
                city = %candidate.city,
                channel = %channel,
                compatible,
                message_id = %receipt.id,
                "Notification sent"
            );
            NotificationOutcome::success(candidate, channel, compatible, receipt.id)
        }
        Err(err) => {
            warn!(
                donor_id = %candidate.id,
                phone = %mask(&candidate.phone_number),
                channel = %channel,
                compatible,
                code = %err.code(),
                error = %err,
                "Notification failed"
            );
            NotificationOutcome::failure(candidate, channel, compatible, err.code(), err.to_string())
        }
    }
}
