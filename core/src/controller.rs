//! # Controller
//!
//! The operations a front end exposes, one method each:
//!
//! | operation | component |
//! | --- | --- |
//! | subnet / local address | [`InterfaceLocator`] |
//! | scan | [`ProbeEngine`] |
//! | configure | [`RelayConfig`] |
//! | start / stop / status | [`RelaySupervisor`] |
//!
//! Callers are expected to `configure` before `start`; the relay only reads
//! its document when it boots.

use std::net::Ipv4Addr;

use tracing::info;

use camscout_common::config::Config;
use camscout_common::network::scan::ScanResult;
use camscout_common::network::subnet::SubnetPrefix;
use camscout_common::relay::{RelayStatus, StartOutcome, StopOutcome};

use crate::error::ControlError;
use crate::relay::config::{RelayConfig, SourceUpdate};
use crate::relay::supervisor::{RelayCommand, RelaySupervisor};
use crate::scanner::ProbeEngine;
use crate::system::InterfaceLocator;

pub struct Controller {
    locator: InterfaceLocator,
    engine: ProbeEngine,
    config: RelayConfig,
    supervisor: RelaySupervisor,
}

impl Controller {
    pub fn new(
        locator: InterfaceLocator,
        engine: ProbeEngine,
        config: RelayConfig,
        supervisor: RelaySupervisor,
    ) -> Self {
        Self {
            locator,
            engine,
            config,
            supervisor,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            InterfaceLocator::default(),
            ProbeEngine::from_config(cfg),
            RelayConfig::new(cfg.config_path.clone()),
            RelaySupervisor::new(RelayCommand::from_config(cfg)),
        )
    }

    pub fn with_engine(mut self, engine: ProbeEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn engine(&self) -> &ProbeEngine {
        &self.engine
    }

    pub fn relay_config(&self) -> &RelayConfig {
        &self.config
    }

    pub fn subnet(&self) -> Option<SubnetPrefix> {
        self.locator.locate_subnet()
    }

    pub fn local_address(&self) -> String {
        self.locator.locate_local_address()
    }

    /// Sweeps the subnet of the current LAN interface.
    pub async fn scan(&self) -> Result<ScanResult, ControlError> {
        Ok(self.engine.scan_subnet(self.subnet()).await?)
    }

    /// Sweeps an explicitly chosen prefix, bypassing interface lookup.
    pub async fn scan_prefix(&self, prefix: SubnetPrefix) -> ScanResult {
        self.engine.sweep(prefix).await
    }

    pub async fn configure(&self, host: &str) -> Result<SourceUpdate, ControlError> {
        let host = host.trim();
        let addr: Ipv4Addr = host
            .parse()
            .map_err(|_| ControlError::InvalidAddress(host.to_string()))?;

        let update = self.config.set_source_address(&addr.to_string()).await?;
        info!("Camera IP updated to: {}", update.host);
        Ok(update)
    }

    pub fn start(&self) -> Result<StartOutcome, ControlError> {
        Ok(self.supervisor.start()?)
    }

    pub fn stop(&self) -> StopOutcome {
        self.supervisor.stop()
    }

    pub fn status(&self) -> RelayStatus {
        self.supervisor.status()
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
