//! Interface lookup.
//!
//! The interface list is read from the operating system on every call; a
//! cable swap or DHCP renewal shows up on the next request.

use std::net::Ipv4Addr;

use pnet::datalink::NetworkInterface;
use tracing::debug;

use camscout_common::constants::FALLBACK_ADDRESS;
use camscout_common::network::interface;
use camscout_common::network::subnet::SubnetPrefix;

pub trait SystemRepository: Send + Sync {
    fn get_network_interfaces(&self) -> Vec<NetworkInterface>;
}

/// Reads interfaces straight from the OS.
pub struct SystemRepo;

impl SystemRepository for SystemRepo {
    fn get_network_interfaces(&self) -> Vec<NetworkInterface> {
        pnet::datalink::interfaces()
    }
}

pub struct InterfaceLocator {
    repo: Box<dyn SystemRepository>,
}

impl Default for InterfaceLocator {
    fn default() -> Self {
        Self::new(Box::new(SystemRepo))
    }
}

impl InterfaceLocator {
    pub fn new(repo: Box<dyn SystemRepository>) -> Self {
        Self { repo }
    }

    pub fn locate_ipv4(&self) -> Option<Ipv4Addr> {
        let interfaces = self.repo.get_network_interfaces();
        let found = interface::first_lan_ipv4(&interfaces);
        debug!(
            "Checked {} interface(s), LAN address: {:?}",
            interfaces.len(),
            found
        );
        found
    }

    /// `None` when the host has no non-loopback IPv4 address.
    pub fn locate_subnet(&self) -> Option<SubnetPrefix> {
        self.locate_ipv4().map(SubnetPrefix::from)
    }

    pub fn locate_local_address(&self) -> String {
        self.locate_ipv4()
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| FALLBACK_ADDRESS.to_string())
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
