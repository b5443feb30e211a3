//! Cuelink core library: an sACN (E1.31) to OSC bridge.
//!
//! This crate implements the live pipeline used by the CLI: the multicast
//! source feeds raw datagrams to the sACN decoder, the routing layer
//! extracts the configured channel, and the bridge reacts to value changes
//! by emitting OSC commands. Parsing is byte-oriented and side-effect
//! free; all I/O is isolated in the `source`, `osc`, and bridge-run
//! layers. Protocol conventions are captured in readers so parsers stay
//! minimal.
//!
//! Invariants:
//! - `decode` returns either a fully validated packet or a classified
//!   rejection; it never panics on malformed input.
//! - Decode checks run outer layer first, in a fixed, reproducible order.
//! - The only state shared across packets is the bridge's last observed
//!   value, written by exactly one loop.
//!
//! # Examples
//! ```no_run
//! use cuelink_core::{run, BridgeConfig};
//!
//! let config = BridgeConfig {
//!     universe: 1,
//!     channel: 1,
//!     iface: None,
//!     osc_target: "127.0.0.1:53000".parse()?,
//!     osc_command: "/cue/%d/go".to_string(),
//!     json_events: false,
//! };
//! run(&config)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod bridge;
mod osc;
pub mod protocols;
mod routing;
mod source;

pub use bridge::{Bridge, BridgeConfig, BridgeError, BridgeEvent, IgnoreReason, run};
pub use osc::{OscError, OscSender, encode_message, format_address};
pub use protocols::sacn::{
    DataPacket, DecodeError, DmpLayer, FramingLayer, PacketField, PacketLayer, RootLayer, decode,
};
pub use routing::{Reading, RoutingError, extract_channel};
pub use source::{ACN_SDT_MULTICAST_PORT, SacnSocket, SourceError, universe_multicast_addr};
