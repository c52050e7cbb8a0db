// Copyright (c) 2025 - Cowboy AI, Inc.
//! Instance Record
//!
//! Provider-neutral view of one compute instance, holding only the fields
//! that inventory generation reads plus a few informational ones.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::NetworkInterface;

/// Provider identifier of an instance
///
/// Some APIs hand out numeric ids, others opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InstanceId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{}", id),
            Self::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<u64> for InstanceId {
    fn from(id: u64) -> Self {
        Self::Numeric(id)
    }
}

impl From<&str> for InstanceId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// One compute instance
///
/// `name` becomes the inventory hostname and should be unique across the
/// fleet. Two instances sharing a name collapse onto a single hostvars entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub id: InstanceId,

    /// Display name, used as the inventory hostname
    pub name: String,

    /// Region slug, e.g. `nyc3`
    pub region: String,

    /// Tags in provider order; duplicates are kept
    #[serde(default)]
    pub tags: Vec<String>,

    /// Interfaces in provider order
    #[serde(default)]
    pub networks: Vec<NetworkInterface>,
}

impl Instance {
    /// Create an instance with no tags and no interfaces
    pub fn new(id: impl Into<InstanceId>, name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            region: region.into(),
            tags: Vec::new(),
            networks: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_network(mut self, network: NetworkInterface) -> Self {
        self.networks.push(network);
        self
    }

    /// First public IPv4 address in interface order
    pub fn public_ipv4(&self) -> Option<&str> {
        self.networks
            .iter()
            .find(|nic| nic.is_public_ipv4())
            .map(|nic| nic.address.as_str())
    }
}
