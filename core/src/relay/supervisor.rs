//! # Relay Supervisor
//!
//! Owns the one relay process camscout may run. The slot sits behind a
//! mutex so `start`, `stop` and `status` serialize; two concurrent starts
//! can never both spawn.
//!
//! Each spawn gets a generation number. The exit watcher only clears the slot
//! if its generation is still current, so a process that was stopped (or
//! replaced) on purpose is never reported as crashed.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use sysinfo::{Pid, PidExt, ProcessExt, Signal, System, SystemExt};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::oneshot;
use tracing::{debug, error, info, warn};

use camscout_common::config::Config;
use camscout_common::relay::{RelayState, RelayStatus, StartOutcome, StopOutcome};

use crate::error::SupervisorError;

/// How to launch the relay.
#[derive(Debug, Clone)]
pub struct RelayCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl RelayCommand {
    pub fn new(program: impl Into<PathBuf>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.relay_program.clone(), cfg.relay_arguments())
    }

    fn display_program(&self) -> String {
        self.program.display().to_string()
    }
}

struct Slot {
    state: RelayState,
    pid: Option<u32>,
    generation: u64,
    last_exit: Option<String>,
    /// Hands a stop request to the task that owns the child.
    stop_tx: Option<oneshot::Sender<()>>,
}

struct Inner {
    command: RelayCommand,
    slot: Mutex<Slot>,
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Cheap to clone; clones share the same slot.
#[derive(Clone)]
pub struct RelaySupervisor {
    inner: Arc<Inner>,
}

impl RelaySupervisor {
    pub fn new(command: RelayCommand) -> Self {
        Self {
            inner: Arc::new(Inner {
                command,
                slot: Mutex::new(Slot {
                    state: RelayState::Stopped,
                    pid: None,
                    generation: 0,
                    last_exit: None,
                    stop_tx: None,
                }),
            }),
        }
    }

    /// Spawns the relay unless one is already supervised.
    ///
    /// Must be called from within a Tokio runtime; the exit watcher and the
    /// output forwarders run as tasks on it.
    pub fn start(&self) -> Result<StartOutcome, SupervisorError> {
        let mut slot = self.inner.lock();
        if slot.state.is_active() {
            debug!("Relay already running (pid {:?})", slot.pid);
            return Ok(StartOutcome::AlreadyRunning { pid: slot.pid });
        }

        slot.state = RelayState::Starting;
        let command = &self.inner.command;

        let spawned = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(source) => {
                slot.state = RelayState::Stopped;
                slot.pid = None;
                error!("Failed to start relay '{}': {source}", command.display_program());
                return Err(SupervisorError::Spawn {
                    program: command.display_program(),
                    source,
                });
            }
        };

        let Some(pid) = child.id() else {
            slot.state = RelayState::Stopped;
            return Err(SupervisorError::Spawn {
                program: command.display_program(),
                source: std::io::Error::other("relay exited before its pid could be read"),
            });
        };

        let (stop_tx, stop_rx) = oneshot::channel();
        slot.generation += 1;
        slot.state = RelayState::Running;
        slot.pid = Some(pid);
        slot.last_exit = None;
        slot.stop_tx = Some(stop_tx);

        forward_output(&mut child, pid);
        tokio::spawn(watch_exit(
            Arc::clone(&self.inner),
            child,
            stop_rx,
            slot.generation,
            pid,
        ));

        info!("Relay started (pid {pid})");
        Ok(StartOutcome::Started { pid })
    }

    /// Requests termination and forgets the process immediately.
    ///
    /// The slot reads `Stopped` as soon as this returns, even if the relay
    /// takes a moment to shut down. The signal itself is sent by the exit
    /// watcher, which still holds the unreaped child, so it can only reach
    /// the relay.
    pub fn stop(&self) -> StopOutcome {
        let mut slot = self.inner.lock();
        let Some(pid) = slot.pid.take() else {
            debug!("Stop requested but relay is not running");
            return StopOutcome::NotRunning;
        };
        slot.state = RelayState::Stopped;
        slot.generation += 1;

        let delivered = slot.stop_tx.take().is_some_and(|tx| tx.send(()).is_ok());
        if !delivered {
            debug!("Relay {pid} watcher already finished");
        }

        info!("Relay stopped (pid {pid})");
        StopOutcome::Stopped { pid }
    }

    pub fn status(&self) -> RelayStatus {
        let slot = self.inner.lock();
        RelayStatus {
            state: slot.state,
            pid: slot.pid,
            last_exit: slot.last_exit.clone(),
        }
    }
}

/// Sends SIGTERM, or a hard kill where the platform has no signals.
///
/// Only called with the pid of a child that has not been reaped yet.
fn terminate(pid: u32) {
    let pid = Pid::from_u32(pid);
    let mut sys = System::new();
    if !sys.refresh_process(pid) {
        debug!("Relay {pid} already gone");
        return;
    }
    let Some(process) = sys.process(pid) else {
        return;
    };

    match process.kill_with(Signal::Term) {
        Some(true) => debug!("SIGTERM sent to {pid}"),
        Some(false) => warn!("Failed to deliver SIGTERM to relay {pid}"),
        None => {
            if !process.kill() {
                warn!("Failed to kill relay {pid}");
            }
        }
    }
}

async fn watch_exit(
    inner: Arc<Inner>,
    mut child: Child,
    stop_rx: oneshot::Receiver<()>,
    generation: u64,
    pid: u32,
) {
    let waited = tokio::select! {
        waited = child.wait() => waited,
        // A dropped sender means the slot moved on as well.
        _ = stop_rx => {
            // `id()` is `None` once the child was reaped, so a recycled pid
            // is never signalled.
            if let Some(id) = child.id() {
                terminate(id);
            }
            child.wait().await
        }
    };

    let exit = match waited {
        Ok(status) => status.to_string(),
        Err(e) => format!("wait failed: {e}"),
    };

    let mut slot = inner.lock();
    if slot.generation != generation {
        debug!("Relay {pid} exited after stop ({exit})");
        return;
    }

    warn!("Relay {pid} exited unexpectedly ({exit})");
    slot.state = RelayState::Crashed;
    slot.pid = None;
    slot.last_exit = Some(exit);
    slot.stop_tx = None;
}

fn forward_output(child: &mut Child, pid: u32) {
    if let Some(stdout) = child.stdout.take() {
        tokio::spawn(forward_lines(stdout, pid));
    }
    if let Some(stderr) = child.stderr.take() {
        tokio::spawn(forward_lines(stderr, pid));
    }
}

/// Drains one output pipe into the log until EOF.
///
/// Lines are read as raw bytes: a relay printing something that is not
/// UTF-8 must not close the pipe, or its next write would raise SIGPIPE.
async fn forward_lines<R>(reader: R, pid: u32)
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf: Vec<u8> = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                debug!(target: "relay", pid, "{}", line.trim_end());
            }
            Err(e) => {
                debug!("Relay {pid} output closed: {e}");
                break;
            }
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
