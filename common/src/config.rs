use std::path::PathBuf;
use std::time::Duration;

use crate::constants;

/// Runtime settings shared by the engine and the front end.
#[derive(Debug, Clone)]
pub struct Config {
    /// Relay configuration document rewritten by `configure`.
    pub config_path: PathBuf,
    /// Relay executable. It is started with `relay_args`, or with the
    /// config path when no arguments are given.
    pub relay_program: PathBuf,
    pub relay_args: Vec<String>,
    pub port: u16,
    pub timeout: Duration,
    /// Output level of the terminal front end (0 = everything).
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(constants::DEFAULT_CONFIG_PATH),
            relay_program: PathBuf::from(constants::DEFAULT_RELAY_PROGRAM),
            relay_args: Vec::new(),
            port: constants::RTSP_PORT,
            timeout: constants::SCAN_TIMEOUT,
            quiet: 0,
        }
    }
}

impl Config {
    /// Arguments passed to the relay process.
    pub fn relay_arguments(&self) -> Vec<String> {
        if self.relay_args.is_empty() {
            vec![self.config_path.to_string_lossy().into_owned()]
        } else {
            self.relay_args.clone()
        }
    }
}
