// Copyright (c) 2025 - Cowboy AI, Inc.
//! Ansible Dynamic Inventory
//!
//! Groups instances by region and by tag and assigns each host its
//! connection variables.
//!
//! # Architecture
//!
//! ```text
//! [Instance]  ──build()──>  Inventory  ──serialize()──>  JSON bytes
//!   (pure)                   (value)         (fallible)
//! ```
//!
//! # Wire format
//!
//! ```text
//! {
//!   "do_nyc3": { "hosts": ["vps2", "vps3"] },
//!   "do_web":  { "hosts": ["vps2", "vps3"] },
//!   "_meta":   { "hostvars": { "vps2": { "ansible_host": "206.81.0.1" } } }
//! }
//! ```

pub mod builder;
pub mod serializer;
pub mod value;

use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

pub use builder::{build, build_with_prefix, InventoryBuilder};
pub use serializer::{serialize, serialize_host, serialize_host_pretty, serialize_pretty};
pub use value::{VarValue, Vars};

/// Prefix applied to every derived group name
pub const GROUP_PREFIX: &str = "do_";

/// Reserved top-level key carrying hostvars
pub const META_KEY: &str = "_meta";

/// Host variable naming the address Ansible connects to
pub const ANSIBLE_HOST: &str = "ansible_host";

/// A named collection of hosts
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Group {
    /// Hostnames in insertion order
    pub hosts: Vec<String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub vars: Vars,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
}

impl Group {
    pub fn contains(&self, host: &str) -> bool {
        self.hosts.iter().any(|h| h == host)
    }
}

/// Grouped inventory plus per-host variables
///
/// Keys are kept sorted so that rendering the same inventory always yields
/// the same bytes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    groups: BTreeMap<String, Group>,
    hostvars: BTreeMap<String, Vars>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    pub fn groups(&self) -> &BTreeMap<String, Group> {
        &self.groups
    }

    pub fn hostvars(&self, host: &str) -> Option<&Vars> {
        self.hostvars.get(host)
    }

    pub fn all_hostvars(&self) -> &BTreeMap<String, Vars> {
        &self.hostvars
    }

    /// Number of distinct hostnames
    pub fn host_count(&self) -> usize {
        self.hostvars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.hostvars.is_empty()
    }

    /// Group by name, created empty on first use
    pub(crate) fn group_mut(&mut self, name: String) -> &mut Group {
        self.groups.entry(name).or_default()
    }

    /// Hostvars of a host, created empty on first use
    pub(crate) fn hostvars_mut(&mut self, host: &str) -> &mut Vars {
        self.hostvars.entry(host.to_string()).or_default()
    }

    /// Attach a group-level variable, creating the group if needed
    pub fn set_group_var(&mut self, group: &str, key: impl Into<String>, value: impl Into<VarValue>) {
        self.group_mut(group.to_string())
            .vars
            .insert(key.into(), value.into());
    }

    /// Declare `child` as a child group of `parent`
    ///
    /// Both groups are created if missing. Adding the same child twice is a
    /// no-op.
    pub fn add_child(&mut self, parent: &str, child: &str) {
        self.group_mut(child.to_string());
        let group = self.group_mut(parent.to_string());
        if !group.children.iter().any(|c| c == child) {
            group.children.push(child.to_string());
        }
    }

    /// Set a host variable, creating the host entry if needed
    pub fn set_host_var(&mut self, host: &str, key: impl Into<String>, value: impl Into<VarValue>) {
        self.hostvars_mut(host).insert(key.into(), value.into());
    }
}

struct Meta<'a> {
    hostvars: &'a BTreeMap<String, Vars>,
}

impl Serialize for Meta<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("hostvars", self.hostvars)?;
        map.end()
    }
}

impl Serialize for Inventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.groups.contains_key(META_KEY) {
            return Err(S::Error::custom(format!(
                "group name `{}` is reserved for hostvars",
                META_KEY
            )));
        }

        let mut map = serializer.serialize_map(Some(self.groups.len() + 1))?;
        for (name, group) in &self.groups {
            map.serialize_entry(name, group)?;
        }
        map.serialize_entry(
            META_KEY,
            &Meta {
                hostvars: &self.hostvars,
            },
        )?;
        map.end()
    }
}
