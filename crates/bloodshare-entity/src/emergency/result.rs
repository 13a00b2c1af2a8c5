//! Aggregate result of one emergency fan-out.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::outcome::{Channel, NotificationOutcome};
use crate::blood_type::BloodType;

/// Success/failure counts for one channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelTally {
    /// Accepted deliveries.
    pub succeeded: usize,
    /// Failed deliveries.
    pub failed: usize,
}

impl ChannelTally {
    /// Total attempts on this channel.
    pub fn attempted(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// Aggregate of every outcome produced for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyResult {
    /// Candidates considered.
    pub total_candidates: usize,
    /// WhatsApp channel counts.
    pub whatsapp: ChannelTally,
    /// Email channel counts.
    pub email: ChannelTally,
    /// Directly compatible donors reached on at least one channel.
    pub compatible_donors_notified: usize,
    /// Other donors reached on at least one channel.
    pub general_donors_notified: usize,
    /// Donor types compatible with the requested type.
    pub compatible_blood_groups: Vec<BloodType>,
    /// Every individual outcome.
    pub outcomes: Vec<NotificationOutcome>,
}

impl EmergencyResult {
    /// A result with no candidates and no attempts.
    pub fn empty(compatible_blood_groups: Vec<BloodType>) -> Self {
        Self::from_outcomes(0, compatible_blood_groups, Vec::new())
    }

    /// Reduce independently collected outcomes into the aggregate.
    pub fn from_outcomes(
        total_candidates: usize,
        compatible_blood_groups: Vec<BloodType>,
        outcomes: Vec<NotificationOutcome>,
    ) -> Self {
        let mut whatsapp = ChannelTally::default();
        let mut email = ChannelTally::default();
        // donor -> (compatible, reached on any channel)
        let mut reached: HashMap<Uuid, (bool, bool)> = HashMap::new();

        for outcome in &outcomes {
            let tally = match outcome.channel {
                Channel::WhatsApp => &mut whatsapp,
                Channel::Email => &mut email,
            };
            if outcome.is_success() {
                tally.succeeded += 1;
            } else {
                tally.failed += 1;
            }

            let entry = reached
                .entry(outcome.donor_id)
                .or_insert((outcome.compatible, false));
            entry.1 |= outcome.is_success();
        }

        let compatible_donors_notified = reached.values().filter(|(c, r)| *c && *r).count();
        let general_donors_notified = reached.values().filter(|(c, r)| !*c && *r).count();

        Self {
            total_candidates,
            whatsapp,
            email,
            compatible_donors_notified,
            general_donors_notified,
            compatible_blood_groups,
            outcomes,
        }
    }

    /// Successful deliveries across both channels.
    pub fn total_succeeded(&self) -> usize {
        self.whatsapp.succeeded + self.email.succeeded
    }

    /// Failed deliveries across both channels.
    pub fn total_failed(&self) -> usize {
        self.whatsapp.failed + self.email.failed
    }

    /// Donors reached on at least one channel.
    pub fn donors_notified(&self) -> usize {
        self.compatible_donors_notified + self.general_donors_notified
    }

    /// Whether something was attempted and nothing got through.
    pub fn all_failed(&self) -> bool {
        self.total_failed() > 0 && self.total_succeeded() == 0
    }
}
