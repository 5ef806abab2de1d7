//! # Subnet Prefix
//!
//! A `/24`-equivalent sweep target: the first three octets of a local IPv4
//! address. Rendered the way the rest of the tool talks about it, with a
//! trailing separator (`192.168.1.`), so `prefix + host` reads naturally.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{FIRST_HOST, LAST_HOST};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubnetPrefix {
    octets: [u8; 3],
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid subnet prefix '{0}', expected A.B.C.")]
pub struct PrefixParseError(String);

impl SubnetPrefix {
    pub fn new(a: u8, b: u8, c: u8) -> Self {
        Self { octets: [a, b, c] }
    }

    /// Address of host `last` inside this prefix.
    pub fn host(&self, last: u8) -> Ipv4Addr {
        let [a, b, c] = self.octets;
        Ipv4Addr::new(a, b, c, last)
    }

    /// Every sweepable host, `.1` through `.254`.
    pub fn hosts(&self) -> impl Iterator<Item = Ipv4Addr> + '_ {
        (FIRST_HOST..=LAST_HOST).map(|last| self.host(last))
    }
}

impl From<Ipv4Addr> for SubnetPrefix {
    /// Truncates the address after its third octet.
    fn from(addr: Ipv4Addr) -> Self {
        let [a, b, c, _] = addr.octets();
        Self::new(a, b, c)
    }
}

impl fmt::Display for SubnetPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.octets;
        write!(f, "{a}.{b}.{c}.")
    }
}

impl FromStr for SubnetPrefix {
    type Err = PrefixParseError;

    /// Accepts `192.168.1.` and `192.168.1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed.strip_suffix('.').unwrap_or(trimmed);

        let octets: Vec<u8> = body
            .split('.')
            .map(|part| part.parse::<u8>())
            .collect::<Result<_, _>>()
            .map_err(|_| PrefixParseError(s.to_string()))?;

        match octets.as_slice() {
            [a, b, c] => Ok(Self::new(*a, *b, *c)),
            _ => Err(PrefixParseError(s.to_string())),
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
