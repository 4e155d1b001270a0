//! Shared protocol tables for flowtag
//!
//! Flow logs carry the IANA protocol *number*, while tag mappings name the
//! protocol. This crate holds the one explicit table that connects the two:
//! - `IanaProtocol` for the numbers a flow log may contain
//! - `protocol` constants for the raw values
//!
//! Kept `no_std` so the table has no allocation or I/O attached to it.

#![cfg_attr(not(test), no_std)]

use core::fmt;
use core::str::FromStr;

/// IANA protocol number constants
pub mod protocol {
    pub const ICMP: u8 = 1;
    pub const IPV4: u8 = 4;
    pub const TCP: u8 = 6;
    pub const UDP: u8 = 17;
    pub const IPV6: u8 = 41;
}

/// Protocols recognised in the flow-log `protocol` column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IanaProtocol {
    Icmp,
    Ipv4,
    Tcp,
    Udp,
    Ipv6,
}

impl IanaProtocol {
    pub const ALL: [IanaProtocol; 5] = [
        IanaProtocol::Icmp,
        IanaProtocol::Ipv4,
        IanaProtocol::Tcp,
        IanaProtocol::Udp,
        IanaProtocol::Ipv6,
    ];

    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            protocol::ICMP => Some(IanaProtocol::Icmp),
            protocol::IPV4 => Some(IanaProtocol::Ipv4),
            protocol::TCP => Some(IanaProtocol::Tcp),
            protocol::UDP => Some(IanaProtocol::Udp),
            protocol::IPV6 => Some(IanaProtocol::Ipv6),
            _ => None,
        }
    }

    pub const fn number(&self) -> u8 {
        match self {
            IanaProtocol::Icmp => protocol::ICMP,
            IanaProtocol::Ipv4 => protocol::IPV4,
            IanaProtocol::Tcp => protocol::TCP,
            IanaProtocol::Udp => protocol::UDP,
            IanaProtocol::Ipv6 => protocol::IPV6,
        }
    }

    /// Canonical lowercase name, as used in tag mappings
    pub const fn name(&self) -> &'static str {
        match self {
            IanaProtocol::Icmp => "icmp",
            IanaProtocol::Ipv4 => "ipv4",
            IanaProtocol::Tcp => "tcp",
            IanaProtocol::Udp => "udp",
            IanaProtocol::Ipv6 => "ipv6",
        }
    }
}

/// Writes the protocol number, the form it takes in a flow log
impl fmt::Display for IanaProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownProtocol;

impl fmt::Display for UnknownProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not a recognised IANA protocol number (1, 4, 6, 17, 41)")
    }
}

/// Parses the exact decimal text of a known protocol number.
///
/// Only the canonical spellings are accepted: `"06"` or `" 6"` are rejected.
impl FromStr for IanaProtocol {
    type Err = UnknownProtocol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(IanaProtocol::Icmp),
            "4" => Ok(IanaProtocol::Ipv4),
            "6" => Ok(IanaProtocol::Tcp),
            "17" => Ok(IanaProtocol::Udp),
            "41" => Ok(IanaProtocol::Ipv6),
            _ => Err(UnknownProtocol),
        }
    }
}
