// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Interface Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

/// Address family of an interface address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

/// Whether an address is reachable from outside the provider's network
///
/// Providers report this as a free-form string. Anything other than
/// `public` or `private` is kept as [`Visibility::Other`] so it never
/// qualifies as a public address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
    Other(String),
}

impl Visibility {
    /// Parse the provider's `type` field
    pub fn from_provider(kind: &str) -> Self {
        match kind {
            "public" => Self::Public,
            "private" => Self::Private,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
            Self::Other(kind) => write!(f, "{}", kind),
        }
    }
}

/// One address attached to an instance
///
/// The address is kept verbatim as the provider reported it. Inventory
/// generation never rejects an instance over a malformed address; use
/// [`NetworkInterface::ip`] when a parsed value is needed.
///
/// # Examples
///
/// ```rust
/// use droplet_inventory::domain::NetworkInterface;
///
/// let nic = NetworkInterface::public_v4("206.81.0.1");
/// assert!(nic.is_public_ipv4());
/// assert_eq!(nic.ip().unwrap().to_string(), "206.81.0.1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkInterface {
    pub address: String,
    pub family: AddressFamily,
    pub visibility: Visibility,
}

impl NetworkInterface {
    pub fn new(address: impl Into<String>, family: AddressFamily, visibility: Visibility) -> Self {
        Self {
            address: address.into(),
            family,
            visibility,
        }
    }

    /// Shorthand for a public IPv4 interface
    pub fn public_v4(address: impl Into<String>) -> Self {
        Self::new(address, AddressFamily::Ipv4, Visibility::Public)
    }

    /// Shorthand for a private IPv4 interface
    pub fn private_v4(address: impl Into<String>) -> Self {
        Self::new(address, AddressFamily::Ipv4, Visibility::Private)
    }

    /// Candidate for `ansible_host`
    pub fn is_public_ipv4(&self) -> bool {
        self.family == AddressFamily::Ipv4 && self.visibility.is_public()
    }

    /// Parse the address, if it is well formed
    pub fn ip(&self) -> Option<IpAddr> {
        self.address.parse().ok()
    }
}

impl fmt::Display for NetworkInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.address, self.visibility)
    }
}
