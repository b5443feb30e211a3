use std::fmt;

use thiserror::Error;

/// Layer of the nested ACN structure a failed invariant belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketLayer {
    Root,
    Framing,
    Dmp,
}

impl fmt::Display for PacketLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PacketLayer::Root => "root",
            PacketLayer::Framing => "framing",
            PacketLayer::Dmp => "DMP",
        };
        write!(f, "{name}")
    }
}

/// Field named by a failed invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketField {
    PreambleSize,
    PostambleSize,
    PacketIdentifier,
    Flags,
    Vector,
    Options,
    AddressType,
    FirstPropertyAddress,
    AddressIncrement,
    StartCode,
}

impl fmt::Display for PacketField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PacketField::PreambleSize => "pre-amble size",
            PacketField::PostambleSize => "post-amble size",
            PacketField::PacketIdentifier => "packet identifier",
            PacketField::Flags => "flags",
            PacketField::Vector => "vector",
            PacketField::Options => "options",
            PacketField::AddressType => "address & data type",
            PacketField::FirstPropertyAddress => "first property address",
            PacketField::AddressIncrement => "address increment",
            PacketField::StartCode => "DMX start code",
        };
        write!(f, "{name}")
    }
}

/// Errors returned by sACN decoding.
///
/// `Truncated` is a transport-level failure (not enough bytes for the fixed
/// layout); `MalformedField` is a semantic one (a constant field did not
/// match). Both classify the packet, neither aborts the caller.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("payload too short: need {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },
    #[error("invalid {layer} layer {field}")]
    MalformedField {
        layer: PacketLayer,
        field: PacketField,
    },
}
