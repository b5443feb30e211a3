//! The live sACN-to-OSC bridge loop.
//!
//! `Bridge` is the pure decision layer: decode, route, and compare against
//! the last observed value. `run` wires it to the multicast socket and the
//! OSC sender and loops forever; every per-packet failure is logged and
//! skipped, because the next packet supersedes the last.

use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};

use log::{debug, info, warn};
use serde::Serialize;
use thiserror::Error;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::osc::{self, OscError, OscSender};
use crate::protocols::sacn::{DecodeError, decode};
use crate::routing::{Reading, RoutingError, extract_channel};
use crate::source::{SacnSocket, SourceError};

/// Receive buffer size; an sACN data packet is 638 bytes, received whole.
const RECV_BUFFER_LEN: usize = 1024;

/// Everything the loop needs, resolved by the CLI.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    pub universe: u16,
    pub channel: u16,
    /// IPv4 address of the interface to join the multicast group on.
    pub iface: Option<Ipv4Addr>,
    pub osc_target: SocketAddr,
    /// OSC address template; `%d` expands to the channel value.
    pub osc_command: String,
    /// Write one JSON line per accepted reading to stdout.
    pub json_events: bool,
}

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("source error: {0}")]
    Source(#[from] SourceError),
    #[error("OSC error: {0}")]
    Osc(#[from] OscError),
}

/// Why a datagram produced no reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Decode(DecodeError),
    Routing(RoutingError),
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::Decode(err) => write!(f, "{err}"),
            IgnoreReason::Routing(err) => write!(f, "{err}"),
        }
    }
}

/// Outcome of one datagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeEvent {
    /// The addressed channel changed value; the first reading ever
    /// observed also counts as a change.
    Changed(Reading),
    Unchanged(Reading),
    Ignored(IgnoreReason),
}

/// Per-run change detector. The last observed value is the only state
/// carried across packets, and this loop is its only writer.
pub struct Bridge {
    universe: u16,
    channel: u16,
    last_value: Option<u8>,
}

impl Bridge {
    pub fn new(universe: u16, channel: u16) -> Self {
        Self {
            universe,
            channel,
            last_value: None,
        }
    }

    /// Decode one datagram and classify the outcome.
    pub fn handle_datagram(&mut self, payload: &[u8]) -> BridgeEvent {
        let packet = match decode(payload) {
            Ok(packet) => packet,
            Err(err) => return BridgeEvent::Ignored(IgnoreReason::Decode(err)),
        };
        let reading = match extract_channel(&packet, self.universe, self.channel) {
            Ok(reading) => reading,
            Err(err) => return BridgeEvent::Ignored(IgnoreReason::Routing(err)),
        };
        if self.last_value == Some(reading.value) {
            return BridgeEvent::Unchanged(reading);
        }
        self.last_value = Some(reading.value);
        BridgeEvent::Changed(reading)
    }
}

#[derive(Debug, Serialize)]
struct ReadingEvent<'a> {
    ts: String,
    universe: u16,
    channel: u16,
    source: &'a str,
    value: u8,
    changed: bool,
}

/// Join the configured universe and bridge channel changes to OSC until
/// the process is stopped. Only failing to acquire the sockets is fatal.
pub fn run(config: &BridgeConfig) -> Result<(), BridgeError> {
    let socket = SacnSocket::bind(config.universe, config.iface)?;
    let sender = OscSender::connect(config.osc_target)?;
    let mut bridge = Bridge::new(config.universe, config.channel);
    let mut buf = [0u8; RECV_BUFFER_LEN];

    loop {
        let len = match socket.recv(&mut buf) {
            Ok(len) => len,
            Err(err) => {
                warn!("receive failed: {err}");
                continue;
            }
        };

        match bridge.handle_datagram(&buf[..len]) {
            BridgeEvent::Changed(reading) => {
                info!(
                    "received packet: source={} dmx[{}]={}",
                    reading.source, config.channel, reading.value
                );
                emit_event(config, &reading, true);

                let address = osc::format_address(&config.osc_command, reading.value);
                match sender.send(&address) {
                    Ok(()) => info!("sent command: dest={} cmd={}", config.osc_target, address),
                    Err(err) => warn!("failed to send command: {err}"),
                }
            }
            BridgeEvent::Unchanged(reading) => {
                debug!(
                    "received packet: source={} dmx[{}]={} (unchanged)",
                    reading.source, config.channel, reading.value
                );
                emit_event(config, &reading, false);
            }
            BridgeEvent::Ignored(reason) => {
                debug!("ignoring packet: {reason}");
            }
        }
    }
}

fn emit_event(config: &BridgeConfig, reading: &Reading, changed: bool) {
    if !config.json_events {
        return;
    }
    let event = ReadingEvent {
        ts: now_rfc3339(),
        universe: config.universe,
        channel: config.channel,
        source: &reading.source,
        value: reading.value,
        changed,
    };
    match serde_json::to_string(&event) {
        Ok(line) => println!("{line}"),
        Err(err) => warn!("failed to serialize event: {err}"),
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}
