// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Inventory Construction
//!
//! Generates arbitrary fleets and checks group membership, hostvars and
//! serialization against the instances that went in.

use droplet_inventory::domain::{AddressFamily, Instance, NetworkInterface, Visibility};
use droplet_inventory::inventory::{
    build, serialize, Inventory, InventoryBuilder, VarValue, ANSIBLE_HOST, GROUP_PREFIX,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

// Region and tag slugs are disjoint so a group is either a region group or a
// tag group, never both.
const REGIONS: &[&str] = &["nyc1", "nyc3", "sfo2", "ams3", "fra1"];
const TAGS: &[&str] = &["web", "db", "cache", "k8s", "staging"];

// ============================================================================
// Strategies
// ============================================================================

fn visibility() -> impl Strategy<Value = Visibility> {
    prop_oneof![
        Just(Visibility::Public),
        Just(Visibility::Private),
        Just(Visibility::Other("anchor".to_string())),
    ]
}

fn family() -> impl Strategy<Value = AddressFamily> {
    prop_oneof![Just(AddressFamily::Ipv4), Just(AddressFamily::Ipv6)]
}

fn network() -> impl Strategy<Value = NetworkInterface> {
    (any::<[u8; 4]>(), family(), visibility()).prop_map(|(octets, family, visibility)| {
        let address = match family {
            AddressFamily::Ipv4 => format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3]),
            AddressFamily::Ipv6 => format!("2001:db8::{:x}{:02x}", octets[0], octets[1]),
        };
        NetworkInterface::new(address, family, visibility)
    })
}

/// An instance without a name; names are assigned per fleet
fn unnamed_instance() -> impl Strategy<Value = Instance> {
    (
        prop::sample::select(REGIONS),
        prop::collection::vec(prop::sample::select(TAGS), 0..5),
        prop::collection::vec(network(), 0..4),
    )
        .prop_map(|(region, tags, networks)| {
            let mut instance = Instance::new(0u64, "", region).with_tags(tags);
            instance.networks = networks;
            instance
        })
}

/// A fleet with unique hostnames
fn fleet() -> impl Strategy<Value = Vec<Instance>> {
    prop::collection::vec(unnamed_instance(), 0..30).prop_map(|instances| {
        instances
            .into_iter()
            .enumerate()
            .map(|(i, mut instance)| {
                instance.id = (i as u64).into();
                instance.name = format!("droplet-{:03}", i);
                instance
            })
            .collect()
    })
}

/// A fleet together with a shuffled copy of it
fn fleet_and_permutation() -> impl Strategy<Value = (Vec<Instance>, Vec<Instance>)> {
    fleet().prop_flat_map(|fleet| (Just(fleet.clone()), Just(fleet).prop_shuffle()))
}

// ============================================================================
// Helpers
// ============================================================================

fn group_name(slug: &str) -> String {
    format!("{}{}", GROUP_PREFIX, slug)
}

fn occurrences(inventory: &Inventory, group: &str, host: &str) -> usize {
    inventory
        .group(group)
        .map(|g| g.hosts.iter().filter(|h| *h == host).count())
        .unwrap_or(0)
}

/// Group name → sorted host list
fn membership(inventory: &Inventory) -> BTreeMap<String, Vec<String>> {
    inventory
        .groups()
        .iter()
        .map(|(name, group)| {
            let mut hosts = group.hosts.clone();
            hosts.sort();
            (name.clone(), hosts)
        })
        .collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: every hostname has exactly one hostvars entry
    #[test]
    fn prop_every_host_has_hostvars(fleet in fleet()) {
        let inventory = build(&fleet);

        prop_assert_eq!(inventory.host_count(), fleet.len());
        for instance in &fleet {
            prop_assert!(inventory.hostvars(&instance.name).is_some());
        }
    }

    /// Property: every hostname is in exactly one region group
    #[test]
    fn prop_one_region_group_per_host(fleet in fleet()) {
        let inventory = build(&fleet);

        for instance in &fleet {
            let memberships: usize = REGIONS
                .iter()
                .map(|region| occurrences(&inventory, &group_name(region), &instance.name))
                .sum();
            prop_assert_eq!(memberships, 1, "{} must be in exactly one region group", instance.name);
            prop_assert_eq!(
                occurrences(&inventory, &group_name(&instance.region), &instance.name),
                1
            );
        }
    }

    /// Property: tag groups list a host once per occurrence of the tag
    #[test]
    fn prop_tag_membership_counts_occurrences(fleet in fleet()) {
        let inventory = build(&fleet);

        for instance in &fleet {
            for tag in TAGS {
                let expected = instance.tags.iter().filter(|t| t == tag).count();
                prop_assert_eq!(
                    occurrences(&inventory, &group_name(tag), &instance.name),
                    expected
                );
            }
        }
    }

    /// Property: no group exists without a region or tag behind it
    #[test]
    fn prop_groups_are_derived(fleet in fleet()) {
        let inventory = build(&fleet);

        for (name, group) in inventory.groups() {
            prop_assert!(name.starts_with(GROUP_PREFIX));
            prop_assert!(!group.hosts.is_empty());
            prop_assert!(group.vars.is_empty());
            prop_assert!(group.children.is_empty());
        }
    }

    /// Property: ansible_host is the first public IPv4 address, if any
    #[test]
    fn prop_ansible_host_is_first_public_ipv4(fleet in fleet()) {
        let inventory = build(&fleet);

        for instance in &fleet {
            let expected = instance
                .networks
                .iter()
                .find(|nic| nic.family == AddressFamily::Ipv4 && nic.visibility == Visibility::Public)
                .map(|nic| VarValue::from(nic.address.as_str()));

            let vars = inventory.hostvars(&instance.name).unwrap();
            prop_assert_eq!(vars.get(ANSIBLE_HOST).cloned(), expected);
        }
    }

    /// Property: input order does not change group membership sets
    #[test]
    fn prop_build_is_order_independent((fleet, shuffled) in fleet_and_permutation()) {
        let original = build(&fleet);
        let permuted = build(&shuffled);

        prop_assert_eq!(membership(&original), membership(&permuted));
        prop_assert_eq!(original.all_hostvars(), permuted.all_hostvars());
    }

    /// Property: serializing the same inventory twice gives identical bytes
    #[test]
    fn prop_serialization_is_deterministic(fleet in fleet()) {
        let inventory = build(&fleet);

        let first = serialize(&inventory).unwrap();
        let second = serialize(&inventory).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: the wire document round-trips the group structure
    #[test]
    fn prop_wire_document_matches_inventory(fleet in fleet()) {
        let inventory = build(&fleet);
        let value: serde_json::Value = serde_json::from_slice(&serialize(&inventory).unwrap()).unwrap();
        let object = value.as_object().unwrap();

        prop_assert_eq!(object.len(), inventory.groups().len() + 1);
        prop_assert_eq!(
            object["_meta"]["hostvars"].as_object().unwrap().len(),
            inventory.host_count()
        );
        for (name, group) in inventory.groups() {
            let hosts: Vec<String> = serde_json::from_value(object[name]["hosts"].clone()).unwrap();
            prop_assert_eq!(&hosts, &group.hosts);
        }
    }

    /// Property: building in two chunks equals building all at once
    #[test]
    fn prop_chunked_build_equals_full_build(fleet in fleet(), split in any::<prop::sample::Index>()) {
        let at = if fleet.is_empty() { 0 } else { split.index(fleet.len() + 1) };
        let (head, tail) = fleet.split_at(at);

        let chunked = tail
            .iter()
            .fold(head.iter().fold(InventoryBuilder::new(), |b, i| b.add(i)), |b, i| b.add(i))
            .finish();

        prop_assert_eq!(chunked, build(&fleet));
    }
}
