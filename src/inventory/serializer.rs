// Copyright (c) 2025 - Cowboy AI, Inc.
//! Rendering an [`Inventory`] to the Ansible dynamic inventory JSON shape
//!
//! Output is fully rendered in memory before it is returned, so a value the
//! wire format cannot carry yields an error and no partial bytes.

use super::{Inventory, Vars};
use crate::errors::SerializationError;

/// Render the full inventory (the `--list` response)
pub fn serialize(inventory: &Inventory) -> Result<Vec<u8>, SerializationError> {
    Ok(serde_json::to_vec(inventory)?)
}

/// Render the full inventory with indentation
pub fn serialize_pretty(inventory: &Inventory) -> Result<Vec<u8>, SerializationError> {
    Ok(serde_json::to_vec_pretty(inventory)?)
}

/// Render one host's variables (the `--host <hostname>` response)
///
/// Unknown hosts render as an empty object.
pub fn serialize_host(inventory: &Inventory, host: &str) -> Result<Vec<u8>, SerializationError> {
    let empty = Vars::new();
    let vars = inventory.hostvars(host).unwrap_or(&empty);
    Ok(serde_json::to_vec(vars)?)
}

/// Render one host's variables with indentation
pub fn serialize_host_pretty(
    inventory: &Inventory,
    host: &str,
) -> Result<Vec<u8>, SerializationError> {
    let empty = Vars::new();
    let vars = inventory.hostvars(host).unwrap_or(&empty);
    Ok(serde_json::to_vec_pretty(vars)?)
}
