use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;

use camscout_common::config::Config;
use camscout_common::network::scan::ScanResult;
use camscout_common::network::subnet::SubnetPrefix;
use camscout_core::controller::Controller;

use crate::cprint;
use crate::terminal::{colors, format, print, spinner};

/// Runs one sweep, either of the detected subnet or of `prefix`.
pub async fn scan(
    ctl: &Controller,
    prefix: Option<SubnetPrefix>,
    cfg: &Config,
) -> anyhow::Result<ScanResult> {
    spinner::start("Probing hosts...", cfg.quiet);
    let start_time: Instant = Instant::now();

    let result = match prefix {
        Some(prefix) => Ok(ctl.scan_prefix(prefix).await),
        None => ctl.scan().await,
    };

    spinner::stop();
    let result: ScanResult = result.context("Scan aborted")?;

    scan_ends(&result, start_time.elapsed(), cfg);
    Ok(result)
}

fn scan_ends(result: &ScanResult, total_time: Duration, cfg: &Config) {
    if result.is_empty() {
        print::header("zero cameras detected", cfg.quiet);
        if cfg.quiet == 0 {
            print::no_results();
        }
        return;
    }

    print::header("camera discovery", cfg.quiet);
    print_hosts(result, cfg);
    print_summary(result, total_time, cfg);
}

fn print_hosts(result: &ScanResult, cfg: &Config) {
    let hosts = result.sorted();
    for (idx, host) in hosts.iter().enumerate() {
        if cfg.quiet >= 2 {
            print::print(&host.to_string());
            continue;
        }
        print::tree_head(idx, &host.to_string());
        print::as_tree_one_level(format::camera_to_details(*host, result.port));
        if idx + 1 != hosts.len() {
            cprint!();
        }
    }
}

fn print_summary(result: &ScanResult, total_time: Duration, cfg: &Config) {
    if cfg.quiet >= 2 {
        return;
    }

    let found: ColoredString = format!("{} camera(s)", result.len()).bold().green();
    let subnet: ColoredString = format!("{}*", result.subnet).color(colors::IPV4_ADDR);
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString =
        format!("Scan Complete: {found} on {subnet} in {total_time}").color(colors::TEXT_DEFAULT);

    print::fat_separator();
    print::centerln(&output.to_string());
}
