//! Outbound OSC command encoding and delivery.
//!
//! Encoding is pure and separate from transport: `format_address` expands
//! the user's command template, `encode_message` produces the wire bytes,
//! and `OscSender` owns the UDP socket.

mod message;
mod sender;

pub use message::{encode_message, format_address};
pub use sender::OscSender;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OscError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
