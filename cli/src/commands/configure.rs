use anyhow::Context;
use camscout_common::config::Config;
use camscout_core::controller::Controller;
use camscout_core::error::ControlError;
use camscout_core::relay::config::SourceUpdate;

use crate::terminal::{colors, format, print};
use colored::*;

pub async fn configure(ctl: &Controller, host: &str, cfg: &Config) -> anyhow::Result<SourceUpdate> {
    print::header("relay configuration", cfg.quiet);

    let update = match ctl.configure(host).await {
        Ok(update) => update,
        Err(ControlError::Config(e)) if e.is_io() => {
            let path = ctl.relay_config().path().display().to_string();
            return Err(e).with_context(|| format!("Relay config {path} is not accessible, see --config"));
        }
        Err(e) => return Err(e.into()),
    };

    print::aligned_line("File", ctl.relay_config().path().display().to_string());
    print::aligned_line("Camera", update.host.as_str().color(colors::IPV4_ADDR));
    print::aligned_line("Source", format::redact_source(&update.source).color(colors::URL));
    if !update.changed {
        print::print_status("Source already pointed at this camera, file left as is");
    }

    Ok(update)
}
