//! Interactive control session.
//!
//! One supervisor lives for the whole session, so `start`, `stop` and
//! `status` act on the same relay the way repeated requests against a
//! long-running service would.

use std::net::Ipv4Addr;
use std::str::FromStr;

use anyhow::Context;
use colored::*;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

use camscout_common::config::Config;
use camscout_common::network::subnet::SubnetPrefix;
use camscout_common::relay::{StartOutcome, StopOutcome};
use camscout_core::controller::Controller;

use crate::commands::{configure, scan, subnet};
use crate::terminal::{colors, format, print};

#[derive(Debug, PartialEq, Eq)]
pub enum ConsoleCommand {
    Help,
    Subnet,
    Scan(Option<SubnetPrefix>),
    /// A literal address, or an index into the last scan.
    Use(Target),
    Start,
    Stop,
    Status,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Target {
    Address(String),
    Index(usize),
}

impl FromStr for ConsoleCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(verb) = words.next() else {
            return Err("empty command".to_string());
        };
        let arg = words.next();
        if words.next().is_some() {
            return Err(format!("too many arguments for '{verb}'"));
        }

        let command = match (verb.to_ascii_lowercase().as_str(), arg) {
            ("help" | "?", None) => ConsoleCommand::Help,
            ("subnet", None) => ConsoleCommand::Subnet,
            ("scan", None) => ConsoleCommand::Scan(None),
            ("scan", Some(prefix)) => ConsoleCommand::Scan(Some(
                prefix.parse().map_err(|e| format!("{e}"))?,
            )),
            ("use" | "configure", Some(target)) => ConsoleCommand::Use(parse_target(target)),
            ("start", None) => ConsoleCommand::Start,
            ("stop", None) => ConsoleCommand::Stop,
            ("status", None) => ConsoleCommand::Status,
            ("quit" | "exit", None) => ConsoleCommand::Quit,
            ("use" | "configure", None) => return Err(format!("'{verb}' needs an address or index")),
            _ => return Err(format!("unknown command '{s}', try 'help'")),
        };
        Ok(command)
    }
}

fn parse_target(s: &str) -> Target {
    match s.parse::<usize>() {
        Ok(index) => Target::Index(index),
        Err(_) => Target::Address(s.to_string()),
    }
}

pub async fn console(ctl: &Controller, cfg: &Config) -> anyhow::Result<()> {
    print::header("control console", cfg.quiet);
    print_help();

    session(ctl, BufReader::new(tokio::io::stdin()), cfg).await
}

/// Runs commands from `input` until quit, end of input, Ctrl-C or a read
/// error. The relay is stopped on every one of those exits.
async fn session<R>(ctl: &Controller, input: R, cfg: &Config) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut last_scan: Vec<Ipv4Addr> = Vec::new();
    let mut read_error: Option<std::io::Error> = None;

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        let line = tokio::select! {
            _ = &mut shutdown => break,
            line = lines.next_line() => line,
        };
        let line = match line {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                read_error = Some(e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ConsoleCommand>() {
            Ok(command) => command,
            Err(e) => {
                warn!("{e}");
                continue;
            }
        };

        if command == ConsoleCommand::Quit {
            break;
        }

        // A failed command never ends the session.
        if let Err(e) = execute(ctl, command, &mut last_scan, cfg).await {
            error!("{e:#}");
        }
    }

    if ctl.status().is_running() {
        info!("Stopping relay before leaving");
        report_stop(ctl.stop());
    }

    match read_error {
        Some(e) => Err(e).context("Failed to read console input"),
        None => Ok(()),
    }
}

async fn execute(
    ctl: &Controller,
    command: ConsoleCommand,
    last_scan: &mut Vec<Ipv4Addr>,
    cfg: &Config,
) -> anyhow::Result<()> {
    match command {
        ConsoleCommand::Help => print_help(),
        ConsoleCommand::Subnet => subnet::subnet(ctl, cfg)?,
        ConsoleCommand::Scan(prefix) => {
            let result = scan::scan(ctl, prefix, cfg).await?;
            *last_scan = result.sorted();
        }
        ConsoleCommand::Use(target) => {
            let host = resolve_target(target, last_scan)?;
            configure::configure(ctl, &host, cfg).await?;
            if ctl.status().is_running() {
                warn!("Relay is running; restart it to pick up the new source");
            }
        }
        ConsoleCommand::Start => report_start(ctl.start()?),
        ConsoleCommand::Stop => report_stop(ctl.stop()),
        ConsoleCommand::Status => {
            let status = ctl.status();
            print::tree_head(0, "relay");
            let mut details = format::status_to_details(&status);
            if let Ok(Some(source)) = ctl.relay_config().source_url().await {
                details.push(("Source".to_string(), format::redact_source(&source).color(colors::URL)));
            }
            print::as_tree_one_level(details);
        }
        ConsoleCommand::Quit => {}
    }
    Ok(())
}

fn resolve_target(target: Target, last_scan: &[Ipv4Addr]) -> anyhow::Result<String> {
    match target {
        Target::Address(host) => Ok(host),
        Target::Index(index) => last_scan
            .get(index)
            .map(|host| host.to_string())
            .ok_or_else(|| anyhow::anyhow!("no camera #{index} in the last scan")),
    }
}

pub fn report_start(outcome: StartOutcome) {
    let pid = outcome
        .pid()
        .map(|pid| pid.to_string())
        .unwrap_or_else(|| "?".to_string());
    match outcome {
        StartOutcome::Started { .. } => info!("Relay started with pid {pid}"),
        StartOutcome::AlreadyRunning { .. } => info!("Relay already running (pid {pid})"),
    }
}

pub fn report_stop(outcome: StopOutcome) {
    match outcome {
        StopOutcome::Stopped { pid } => info!("Relay stopped (pid {pid})"),
        StopOutcome::NotRunning => info!("Relay is not running"),
    }
}

fn print_help() {
    let rows = [
        ("subnet", "show local address and subnet"),
        ("scan [A.B.C.]", "probe the subnet for cameras"),
        ("use <ip|#>", "point the relay at a camera"),
        ("start", "start the relay"),
        ("stop", "stop the relay"),
        ("status", "relay state and source"),
        ("quit", "stop the relay and leave"),
    ];
    for (cmd, about) in rows {
        print::print_status(format!("{:<14} {}", cmd.color(colors::PRIMARY), about));
    }
}
