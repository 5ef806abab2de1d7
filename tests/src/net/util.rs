use camscout_core::system::{InterfaceLocator, SystemRepository};
use pnet::datalink::{MacAddr, NetworkInterface};
use pnet::ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};
use std::net::{Ipv4Addr, Ipv6Addr};

pub struct MockSystem(pub Vec<NetworkInterface>);

impl SystemRepository for MockSystem {
    fn get_network_interfaces(&self) -> Vec<NetworkInterface> {
        self.0.clone()
    }
}

pub fn locator(interfaces: Vec<NetworkInterface>) -> InterfaceLocator {
    InterfaceLocator::new(Box::new(MockSystem(interfaces)))
}

pub fn ni(name: &str, index: u32, mac: Option<MacAddr>, ips: &[IpNetwork], flags: u32) -> NetworkInterface {
    NetworkInterface {
        name: name.into(),
        description: "".into(),
        index,
        mac,
        ips: ips.to_vec(),
        flags,
    }
}

pub fn v4(a: u8, b: u8, c: u8, d: u8, p: u8) -> IpNetwork {
    IpNetwork::V4(Ipv4Network::new(Ipv4Addr::new(a, b, c, d), p).unwrap())
}

pub fn v6(s: &str, p: u8) -> IpNetwork {
    IpNetwork::V6(Ipv6Network::new(s.parse::<Ipv6Addr>().unwrap(), p).unwrap())
}
