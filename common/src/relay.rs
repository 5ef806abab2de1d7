//! Status vocabulary of the relay supervisor.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayState {
    Stopped,
    /// Spawn in progress. Only visible while the supervisor holds its lock.
    Starting,
    Running,
    /// The relay exited on its own while it was supervised.
    Crashed,
}

impl RelayState {
    pub fn is_active(&self) -> bool {
        matches!(self, RelayState::Starting | RelayState::Running)
    }
}

impl fmt::Display for RelayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RelayState::Stopped => "stopped",
            RelayState::Starting => "starting",
            RelayState::Running => "running",
            RelayState::Crashed => "crashed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayStatus {
    pub state: RelayState,
    pub pid: Option<u32>,
    /// How the last supervised process ended, if it ended on its own.
    pub last_exit: Option<String>,
}

impl RelayStatus {
    pub fn stopped() -> Self {
        Self {
            state: RelayState::Stopped,
            pid: None,
            last_exit: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.is_active()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started { pid: u32 },
    AlreadyRunning { pid: Option<u32> },
}

impl StartOutcome {
    pub fn pid(&self) -> Option<u32> {
        match self {
            StartOutcome::Started { pid } => Some(*pid),
            StartOutcome::AlreadyRunning { pid } => *pid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    /// Termination was requested; the process may still be shutting down.
    Stopped { pid: u32 },
    NotRunning,
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
