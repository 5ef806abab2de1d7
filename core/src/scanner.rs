//! The subnet sweep.
//!
//! One task per candidate host, all spawned up front on a [`JoinSet`] and
//! drained to completion. Every probe runs under the engine's timeout, so a
//! full sweep takes roughly one timeout no matter how many hosts stay silent.
//!
//! Results are only ever written from the draining loop; probe tasks hand
//! back `(host, open)` and own nothing shared.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use camscout_common::config::Config;
use camscout_common::constants::{RTSP_PORT, SCAN_TIMEOUT};
use camscout_common::network::scan::ScanResult;
use camscout_common::network::subnet::SubnetPrefix;

use crate::error::ScanError;
use crate::network::tcp::{Prober, TcpProber};

type HostCallback = Arc<dyn Fn(Ipv4Addr, usize) + Send + Sync>;

#[derive(Clone)]
pub struct ProbeEngine {
    prober: Arc<dyn Prober>,
    port: u16,
    timeout: Duration,
    on_host_found: Option<HostCallback>,
}

impl Default for ProbeEngine {
    fn default() -> Self {
        Self::new(RTSP_PORT, SCAN_TIMEOUT)
    }
}

impl ProbeEngine {
    pub fn new(port: u16, timeout: Duration) -> Self {
        Self {
            prober: Arc::new(TcpProber),
            port,
            timeout,
            on_host_found: None,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.port, cfg.timeout)
    }

    pub fn with_prober(mut self, prober: Arc<dyn Prober>) -> Self {
        self.prober = prober;
        self
    }

    /// Called with each responsive host and the running total.
    pub fn on_host_found(mut self, callback: impl Fn(Ipv4Addr, usize) + Send + Sync + 'static) -> Self {
        self.on_host_found = Some(Arc::new(callback));
        self
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn scan_subnet(&self, prefix: Option<SubnetPrefix>) -> Result<ScanResult, ScanError> {
        let Some(prefix) = prefix else {
            warn!("Unable to get subnet, skipping scan");
            return Err(ScanError::NoSubnet);
        };
        Ok(self.sweep(prefix).await)
    }

    /// Probes `.1` through `.254` of `prefix` and waits for all of them.
    pub async fn sweep(&self, prefix: SubnetPrefix) -> ScanResult {
        info!("Scanning subnet: {prefix}* on port {}", self.port);

        let mut probes: JoinSet<(Ipv4Addr, bool)> = JoinSet::new();
        for host in prefix.hosts() {
            let prober = Arc::clone(&self.prober);
            let addr = SocketAddr::new(IpAddr::V4(host), self.port);
            let limit = self.timeout;

            probes.spawn(async move {
                // Elapsed drops the pending connect, releasing its socket.
                let open = matches!(timeout(limit, prober.probe(addr)).await, Ok(true));
                (host, open)
            });
        }

        let mut result = ScanResult::new(prefix, self.port);
        while let Some(joined) = probes.join_next().await {
            match joined {
                Ok((host, true)) => {
                    result.push(host);
                    info!("Found camera at: {host}");
                    if let Some(callback) = &self.on_host_found {
                        callback(host, result.len());
                    }
                }
                Ok((_, false)) => {}
                Err(e) => debug!("Probe task ended abnormally: {e}"),
            }
        }

        info!("Scan complete. Found {} device(s)", result.len());
        result
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
