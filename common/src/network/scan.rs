use std::net::Ipv4Addr;

use crate::network::subnet::SubnetPrefix;

/// Hosts that accepted a connection during one sweep.
///
/// Kept in completion order. Every address is probed once, so entries are
/// unique without any extra bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub subnet: SubnetPrefix,
    pub port: u16,
    hosts: Vec<Ipv4Addr>,
}

impl ScanResult {
    pub fn new(subnet: SubnetPrefix, port: u16) -> Self {
        Self {
            subnet,
            port,
            hosts: Vec::new(),
        }
    }

    pub fn push(&mut self, host: Ipv4Addr) {
        self.hosts.push(host);
    }

    pub fn contains(&self, host: Ipv4Addr) -> bool {
        self.hosts.contains(&host)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ipv4Addr> {
        self.hosts.iter()
    }

    /// First host to answer, the default pick when the caller has no preference.
    pub fn first(&self) -> Option<Ipv4Addr> {
        self.hosts.first().copied()
    }

    /// Hosts in address order, for display.
    pub fn sorted(&self) -> Vec<Ipv4Addr> {
        let mut hosts = self.hosts.clone();
        hosts.sort();
        hosts
    }
}
