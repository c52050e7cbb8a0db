// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for droplet-inventory
//!
//! Deterministic droplets and API payloads shared by the integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};

use droplet_inventory::domain::{Instance, NetworkInterface};

/// `vps2`: nyc3, tagged `web`
pub fn vps2() -> Instance {
    Instance::new(3164444u64, "vps2", "nyc3")
        .with_tag("web")
        .with_network(NetworkInterface::public_v4("206.81.0.1"))
}

/// `vps3`: nyc3, tagged `web` and `db`
pub fn vps3() -> Instance {
    Instance::new(3164445u64, "vps3", "nyc3")
        .with_tags(["web", "db"])
        .with_network(NetworkInterface::public_v4("104.248.0.1"))
}

/// Both sample droplets in API order
pub fn sample_fleet() -> Vec<Instance> {
    vec![vps2(), vps3()]
}

/// A droplet as the API returns it
pub fn droplet_json(id: u64, name: &str, region: &str, tags: &[&str], public_ip: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "memory": 1024,
        "vcpus": 1,
        "disk": 25,
        "locked": false,
        "status": "active",
        "features": ["private_networking"],
        "region": { "slug": region, "name": region.to_uppercase() },
        "image": { "id": 6918990, "name": "22.04 (LTS) x64" },
        "networks": {
            "v4": [
                { "ip_address": "10.128.0.2", "netmask": "255.255.0.0", "gateway": "", "type": "private" },
                { "ip_address": public_ip, "netmask": "255.255.240.0", "gateway": "0.0.0.0", "type": "public" }
            ],
            "v6": []
        },
        "tags": tags
    })
}

/// `GET /droplets` body for the sample fleet
pub fn sample_response() -> Value {
    json!({
        "droplets": [
            droplet_json(3164444, "vps2", "nyc3", &["web"], "206.81.0.1"),
            droplet_json(3164445, "vps3", "nyc3", &["web", "db"], "104.248.0.1")
        ],
        "links": {},
        "meta": { "total": 2 }
    })
}

/// Expected `--list` document for the sample fleet
pub fn sample_inventory_json() -> Value {
    json!({
        "do_db": { "hosts": ["vps3"] },
        "do_nyc3": { "hosts": ["vps2", "vps3"] },
        "do_web": { "hosts": ["vps2", "vps3"] },
        "_meta": {
            "hostvars": {
                "vps2": { "ansible_host": "206.81.0.1" },
                "vps3": { "ansible_host": "104.248.0.1" }
            }
        }
    })
}
