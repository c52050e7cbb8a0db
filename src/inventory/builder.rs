// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory construction
//!
//! A single pass over the instances, folding each one into a fresh
//! [`Inventory`]:
//!
//! - region group `<prefix><region>` gains the hostname
//! - every tag group `<prefix><tag>` gains the hostname, once per occurrence
//! - the host gets a hostvars entry, with `ansible_host` set to its first
//!   public IPv4 address when it has one
//!
//! Building never fails and never performs I/O.

use tracing::{debug, trace};

use super::{Inventory, ANSIBLE_HOST, GROUP_PREFIX};
use crate::domain::Instance;

/// Build an inventory using the `do_` group prefix
///
/// # Example
///
/// ```rust
/// use droplet_inventory::domain::{Instance, NetworkInterface};
/// use droplet_inventory::inventory::build;
///
/// let instances = vec![
///     Instance::new(1u64, "vps2", "nyc3")
///         .with_tag("web")
///         .with_network(NetworkInterface::public_v4("206.81.0.1")),
/// ];
///
/// let inventory = build(&instances);
/// assert_eq!(inventory.group("do_nyc3").unwrap().hosts, vec!["vps2"]);
/// assert_eq!(inventory.group("do_web").unwrap().hosts, vec!["vps2"]);
/// ```
pub fn build<'a, I>(instances: I) -> Inventory
where
    I: IntoIterator<Item = &'a Instance>,
{
    build_with_prefix(instances, GROUP_PREFIX)
}

/// Build an inventory with a caller-chosen group prefix
///
/// With an empty prefix a region or tag named `_meta` produces a group that
/// [`serialize`](super::serialize) refuses to render.
pub fn build_with_prefix<'a, I>(instances: I, prefix: &str) -> Inventory
where
    I: IntoIterator<Item = &'a Instance>,
{
    instances
        .into_iter()
        .fold(InventoryBuilder::with_prefix(prefix), |builder, instance| {
            builder.add(instance)
        })
        .finish()
}

/// Incremental form of [`build`]
///
/// Each call to [`InventoryBuilder::add`] folds one instance into the
/// inventory under construction; [`InventoryBuilder::finish`] hands it over.
#[derive(Debug, Clone)]
pub struct InventoryBuilder {
    prefix: String,
    inventory: Inventory,
}

impl Default for InventoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryBuilder {
    pub fn new() -> Self {
        Self::with_prefix(GROUP_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            inventory: Inventory::new(),
        }
    }

    fn group_name(&self, slug: &str) -> String {
        format!("{}{}", self.prefix, slug)
    }

    /// Fold one instance into the inventory
    pub fn add(mut self, instance: &Instance) -> Self {
        trace!(
            "Adding instance {} ({}) in {}",
            instance.name,
            instance.id,
            instance.region
        );

        let region_group = self.group_name(&instance.region);
        self.inventory
            .group_mut(region_group)
            .hosts
            .push(instance.name.clone());

        for tag in &instance.tags {
            let tag_group = self.group_name(tag);
            self.inventory
                .group_mut(tag_group)
                .hosts
                .push(instance.name.clone());
        }

        let hostvars = self.inventory.hostvars_mut(&instance.name);
        match instance.public_ipv4() {
            Some(address) => {
                hostvars.insert(ANSIBLE_HOST.to_string(), address.into());
            }
            None => debug!("Instance {} has no public IPv4 address", instance.name),
        }

        self
    }

    /// Hand over the finished inventory
    pub fn finish(self) -> Inventory {
        debug!(
            "Built inventory with {} groups and {} hosts",
            self.inventory.groups().len(),
            self.inventory.host_count()
        );
        self.inventory
    }
}
