//! Application-level routing of validated packets.
//!
//! Decode answers "is this a well-formed sACN data packet"; this module
//! answers "is it the packet we are listening for". Keeping the universe
//! and channel checks out of the decoder means a packet for another
//! universe on the same multicast group is reported as routing noise, not
//! as protocol corruption.

use serde::Serialize;
use thiserror::Error;

use crate::protocols::sacn::DataPacket;

/// One extracted channel reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    /// Sender's source name, trimmed of NUL padding.
    pub source: String,
    /// The addressed channel's value.
    pub value: u8,
}

/// Errors returned when routing a valid packet to the configured address.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RoutingError {
    #[error("packet addressed to universe {actual}, not {want}")]
    UniverseMismatch { want: u16, actual: u16 },
    #[error("channel {channel} not carried by packet ({count} property values)")]
    ChannelOutOfRange { channel: u16, count: u16 },
}

/// Extract the value of one channel from a validated packet.
///
/// `channel` is the 1-based DMX channel number, used directly as the
/// property-values index (index 0 addresses the start code). It must be
/// strictly below the packet's advertised property value count.
pub fn extract_channel(
    packet: &DataPacket,
    universe: u16,
    channel: u16,
) -> Result<Reading, RoutingError> {
    if packet.framing.universe != universe {
        return Err(RoutingError::UniverseMismatch {
            want: universe,
            actual: packet.framing.universe,
        });
    }
    let count = packet.dmp.property_value_count;
    if channel >= count {
        return Err(RoutingError::ChannelOutOfRange { channel, count });
    }
    // The advertised count is sender-controlled and may exceed the fixed
    // array; never index past it.
    let value = packet
        .dmp
        .property_values
        .get(usize::from(channel))
        .copied()
        .ok_or(RoutingError::ChannelOutOfRange { channel, count })?;

    Ok(Reading {
        source: packet.framing.source_name(),
        value,
    })
}
