use colored::*;
use tracing::warn;

use camscout_common::config::Config;
use camscout_core::controller::Controller;

use crate::terminal::{colors, print};

pub fn subnet(ctl: &Controller, cfg: &Config) -> anyhow::Result<()> {
    print::header("local network", cfg.quiet);

    match ctl.subnet() {
        Some(prefix) => print::aligned_line("Subnet", format!("{prefix}*").color(colors::IPV4_ADDR)),
        None => warn!("Unable to get subnet: no non-loopback IPv4 interface"),
    }
    print::aligned_line("Address", ctl.local_address());
    print::aligned_line("Port", ctl.engine().port().to_string());
    print::aligned_line("Timeout", format!("{}ms", ctl.engine().timeout().as_millis()));

    Ok(())
}
