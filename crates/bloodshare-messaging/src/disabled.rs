//! Stand-in transport for channels that are switched off.

use async_trait::async_trait;

use bloodshare_entity::emergency::Channel;

use crate::transport::{DeliveryError, DeliveryReceipt, EmailTransport, MessageTransport};

/// Fails every send with [`DeliveryError::ChannelDisabled`].
#[derive(Debug, Clone, Copy)]
pub struct DisabledTransport {
    channel: Channel,
}

impl DisabledTransport {
    /// A disabled transport for `channel`.
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }
}

#[async_trait]
impl MessageTransport for DisabledTransport {
    async fn send(&self, _to: &str, _body: &str) -> Result<DeliveryReceipt, DeliveryError> {
        Err(DeliveryError::ChannelDisabled(self.channel))
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

#[async_trait]
impl EmailTransport for DisabledTransport {
    async fn send(
        &self,
        _to: &str,
        _subject: &str,
        _html: &str,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        Err(DeliveryError::ChannelDisabled(self.channel))
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
