// Copyright (c) 2025 - Cowboy AI, Inc.
//! Ansible dynamic inventory for DigitalOcean droplets
//!
//! Droplets are grouped by region and by tag, and each host gets its public
//! IPv4 address as `ansible_host`. The inventory construction itself is pure;
//! fetching droplets and loading configuration are thin layers around it.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod inventory;
pub mod source;

// Re-export commonly used types
pub use config::DigitalOceanConfig;
pub use domain::{Instance, InstanceId, NetworkInterface};
pub use errors::{ConfigError, FetchError, InventoryError, InventoryResult, SerializationError};
pub use inventory::{build, serialize, Group, Inventory, VarValue};
pub use source::{generate, InstanceSource, StaticSource};
