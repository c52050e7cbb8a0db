// Copyright (c) 2025 - Cowboy AI, Inc.

//! Instance source implementations
//!
//! Concrete implementations of the [`InstanceSource`](crate::source::InstanceSource)
//! trait for cloud provider APIs.

#[cfg(feature = "digitalocean")]
pub mod digitalocean;

#[cfg(feature = "digitalocean")]
pub use digitalocean::{decode_droplets, DigitalOceanClient, Droplet, DropletsResponse};
