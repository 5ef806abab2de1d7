use super::util::{locator, ni, v4, v6};
use camscout_common::network::subnet::SubnetPrefix;
use pnet::datalink::{MacAddr, NetworkInterface};
use std::net::Ipv4Addr;

/*************************************************************
                    Subnet detection
**************************************************************/

#[test]
fn full_machine_picks_enp9s0() {
    let locator = locator(iface_all());
    assert_eq!(locator.locate_ipv4(), Some(Ipv4Addr::new(192, 168, 0, 32)));
    assert_eq!(locator.locate_subnet(), Some(SubnetPrefix::new(192, 168, 0)));
}

#[test]
fn wlan0_behind_ipv6_only_interface() {
    let locator = locator(vec![lo(), ipv6leakintrf0(), wlan0()]);
    assert_eq!(locator.locate_subnet().unwrap().to_string(), "192.168.1.");
    assert_eq!(locator.locate_local_address(), "192.168.1.42");
}

#[test]
fn enumeration_order_decides_between_candidates() {
    let locator = locator(vec![lo(), tun0(), eth1()]);
    assert_eq!(locator.locate_subnet(), Some(SubnetPrefix::new(10, 96, 0)));
}

#[test]
fn nothing_but_loopback_and_ipv6() {
    let locator = locator(vec![lo(), ipv6leakintrf0()]);
    assert!(locator.locate_subnet().is_none(), "Expected no subnet");
    assert_eq!(locator.locate_local_address(), "127.0.0.1");
}

#[test]
fn empty_interface_list() {
    let locator = locator(Vec::new());
    assert!(locator.locate_ipv4().is_none());
    assert_eq!(locator.locate_local_address(), "127.0.0.1");
}

/*************************************************************
                  Mock interfaces for testing
**************************************************************/

fn iface_all() -> Vec<NetworkInterface> {
    vec![lo(), enp9s0(), tun0(), ipv6leakintrf0(), wlan0(), eth1()]
}

fn lo() -> NetworkInterface {
    ni(
        "lo",
        1,
        Some(MacAddr::new(0, 0, 0, 0, 0, 0)),
        &[v4(127, 0, 0, 1, 8), v6("::1", 128)],
        65609,
    )
}

fn enp9s0() -> NetworkInterface {
    ni(
        "enp9s0",
        2,
        Some(MacAddr::new(0xa8, 0xa1, 0x59, 0x13, 0x41, 0x46)),
        &[
            v4(192, 168, 0, 32, 24),
            v6("2a02:908:8c1:b880::b054", 128),
            v6("fe80::b3dd:5c39:7c29:48b6", 64),
        ],
        69699,
    )
}

fn tun0() -> NetworkInterface {
    ni(
        "tun0",
        5,
        None,
        &[v4(10, 96, 0, 57, 16), v6("fe80::c137:8964:5a63:efde", 64)],
        69841,
    )
}

fn ipv6leakintrf0() -> NetworkInterface {
    ni(
        "ipv6leakintrf0",
        6,
        Some(MacAddr::new(0xd2, 0x25, 0xd4, 0x9f, 0x18, 0xfd)),
        &[v6("fdeb:446c:912d:8da::", 64), v6("fe80::7f87:ff4a:9ad8:d2f0", 64)],
        65731,
    )
}

fn wlan0() -> NetworkInterface {
    ni(
        "wlan0",
        3,
        Some(MacAddr::new(0x34, 0xcf, 0xf6, 0x9a, 0x11, 0x22)),
        &[v4(192, 168, 1, 42, 24), v6("fe80::36cf:f6ff:fe9a:1122", 64)],
        69699,
    )
}

fn eth1() -> NetworkInterface {
    ni(
        "eth1",
        4,
        Some(MacAddr::new(0x52, 0x54, 0x00, 0x12, 0x34, 0x56)),
        &[v4(10, 0, 0, 15, 24)],
        69699,
    )
}
