pub mod configure;
pub mod console;
pub mod run;
pub mod scan;
pub mod subnet;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};

use camscout_common::config::Config;
use camscout_common::constants::{DEFAULT_CONFIG_PATH, DEFAULT_RELAY_PROGRAM, RTSP_PORT};
use camscout_common::network::subnet::SubnetPrefix;

#[derive(Parser)]
#[command(name = "camscout")]
#[command(about = "Find RTSP cameras on the local network and relay one of them.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Relay configuration document to rewrite
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Relay executable
    #[arg(long, global = true, default_value = DEFAULT_RELAY_PROGRAM)]
    pub relay: PathBuf,

    /// Argument passed to the relay (repeatable, defaults to the config path)
    #[arg(long = "relay-arg", global = true, allow_hyphen_values = true)]
    pub relay_args: Vec<String>,

    /// Port probed on every host
    #[arg(short, long, global = true, default_value_t = RTSP_PORT)]
    pub port: u16,

    /// Per-host connect timeout in milliseconds
    #[arg(short, long = "timeout-ms", global = true, default_value_t = 500)]
    pub timeout: u64,

    /// Reduce output (-q hides decorations, -qq prints results only)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the local address and the subnet that would be scanned
    #[command(alias = "n")]
    Subnet,
    /// Probe every host of the subnet for an open RTSP port
    #[command(alias = "s")]
    Scan {
        /// Scan this prefix (e.g. 192.168.1.) instead of the detected one
        #[arg(long)]
        subnet: Option<SubnetPrefix>,
    },
    /// Point the relay configuration at a camera
    #[command(alias = "c")]
    Configure { host: String },
    /// Configure and start the relay, stopping it on Ctrl-C
    #[command(alias = "r")]
    Run {
        /// Camera address; the first discovered camera when omitted
        host: Option<String>,
        #[arg(long)]
        subnet: Option<SubnetPrefix>,
    },
    /// Interactive control session
    #[command(alias = "i")]
    Console,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            config_path: self.config.clone(),
            relay_program: self.relay.clone(),
            relay_args: self.relay_args.clone(),
            port: self.port,
            timeout: Duration::from_millis(self.timeout),
            quiet: self.quiet,
        }
    }
}
