use std::time::Duration;

use anyhow::Context;
use tracing::{info, warn};

use camscout_common::config::Config;
use camscout_common::network::subnet::SubnetPrefix;
use camscout_core::controller::Controller;

use crate::commands::{configure, console, scan};
use crate::terminal::{format, print};

const STATUS_POLL: Duration = Duration::from_millis(500);

/// Configure, start, then babysit the relay until Ctrl-C or until it dies.
pub async fn run(
    ctl: &Controller,
    host: Option<String>,
    prefix: Option<SubnetPrefix>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let host: String = match host {
        Some(host) => host,
        None => {
            let result = scan::scan(ctl, prefix, cfg).await?;
            let first = result.first().context("No cameras found, nothing to relay")?;
            info!("Using first camera found: {first}");
            first.to_string()
        }
    };

    configure::configure(ctl, &host, cfg).await?;

    print::header("relay", cfg.quiet);
    console::report_start(ctl.start()?);
    info!("Press Ctrl-C to stop the relay");

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);
    let mut ticker = tokio::time::interval(STATUS_POLL);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                console::report_stop(ctl.stop());
                return Ok(());
            }
            _ = ticker.tick() => {
                let status = ctl.status();
                if !status.is_running() {
                    warn!("Relay is no longer running");
                    print::as_tree_one_level(format::status_to_details(&status));
                    anyhow::bail!(
                        "relay exited: {}",
                        status.last_exit.unwrap_or_else(|| "unknown reason".to_string())
                    );
                }
            }
        }
    }
}
