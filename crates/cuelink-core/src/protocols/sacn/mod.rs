//! sACN (E1.31) data packet decoding.
//!
//! The parser validates the ACN packet identifier, the per-layer flags and
//! vectors, and the DMP addressing constants before a packet is considered
//! well-formed, then exposes the full root/framing/DMP structure. The
//! universe field is deliberately left to `routing`: a packet addressed to
//! another universe is a valid packet, not a malformed one.
//!
//! Errors report the first failing invariant in a fixed outer-layer-first
//! order. Wire-format offsets and constants are defined in `layout`, safe
//! byte access lives in `reader`.

pub mod error;
pub mod layout;
pub mod packet;
pub mod parser;
pub mod reader;

pub use error::{DecodeError, PacketField, PacketLayer};
pub use packet::{DataPacket, DmpLayer, FramingLayer, RootLayer};
pub use parser::decode;
