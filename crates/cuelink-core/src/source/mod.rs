//! Network input for the bridge.
//!
//! All socket I/O is isolated here; the decoder and routing layers only
//! ever see byte slices.

mod socket;

pub use socket::{SacnSocket, universe_multicast_addr};

use thiserror::Error;

/// UDP port assigned to ACN SDT multicast, used by every sACN sender.
pub const ACN_SDT_MULTICAST_PORT: u16 = 5568;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
