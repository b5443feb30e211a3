use std::net::{Ipv4Addr, SocketAddr, ToSocketAddrs};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::info;

use cuelink_core::BridgeConfig;
use cuelink_core::protocols::sacn::layout;

/// Highest universe number assignable in E1.31.
const MAX_UNIVERSE: u16 = 63999;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CUELINK_BUILD_COMMIT"),
    " ",
    env!("CUELINK_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "cuelink")]
#[command(version = VERSION)]
#[command(
    about = "Bridge sACN (E1.31) DMX channel changes to OSC commands.",
    long_about = None,
    after_help = "Examples:\n  cuelink --universe 1 --dmx 5\n  cuelink --osc-address 192.168.1.10:53000 --osc-command /cue/%d/go\n  cuelink --iface 192.168.1.2 --json"
)]
struct Cli {
    /// sACN universe to join (1-63999)
    #[arg(long, default_value_t = 1)]
    universe: u16,

    /// DMX channel to watch (1-512)
    #[arg(long = "dmx", default_value_t = 1)]
    dmx_channel: u16,

    /// IPv4 address of the interface to receive multicast on
    #[arg(long)]
    iface: Option<Ipv4Addr>,

    /// OSC target as host:port
    #[arg(long, default_value = "127.0.0.1:53000")]
    osc_address: String,

    /// OSC command template; %d is replaced by the received DMX value
    #[arg(long, default_value = "/cue/%d/go")]
    osc_command: String,

    /// Write one JSON line per received reading to stdout
    #[arg(long)]
    json: bool,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if cli.universe == 0 || cli.universe > MAX_UNIVERSE {
        return Err(CliError::new(
            format!("universe {} out of range", cli.universe),
            Some(format!("valid sACN universes are 1-{MAX_UNIVERSE}")),
        ));
    }
    let max_channel = layout::DMX_MAX_SLOTS as u16;
    if cli.dmx_channel == 0 || cli.dmx_channel > max_channel {
        return Err(CliError::new(
            format!("DMX channel {} out of range", cli.dmx_channel),
            Some(format!("valid DMX channels are 1-{max_channel}")),
        ));
    }
    let osc_target = resolve_osc_target(&cli.osc_address)?;

    let config = BridgeConfig {
        universe: cli.universe,
        channel: cli.dmx_channel,
        iface: cli.iface,
        osc_target,
        osc_command: cli.osc_command,
        json_events: cli.json,
    };

    info!(
        "cuelink {}: universe {} dmx[{}] -> {} ({})",
        VERSION, config.universe, config.channel, config.osc_target, config.osc_command
    );

    cuelink_core::run(&config).context("bridge failed")?;
    Ok(())
}

fn resolve_osc_target(address: &str) -> Result<SocketAddr, CliError> {
    let mut addrs = address.to_socket_addrs().map_err(|err| {
        CliError::new(
            format!("invalid OSC address '{address}': {err}"),
            Some("use host:port, e.g. 127.0.0.1:53000".to_string()),
        )
    })?;
    addrs.next().ok_or_else(|| {
        CliError::new(
            format!("OSC address '{address}' did not resolve"),
            Some("use host:port, e.g. 127.0.0.1:53000".to_string()),
        )
    })
}

fn init_logger(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
