// Copyright (c) 2025 - Cowboy AI, Inc.
//! Instance Domain Models
//!
//! Provider-neutral records that inventory generation consumes.
//!
//! - [`Instance`] - one compute instance with its tags and interfaces
//! - [`InstanceId`] - numeric or opaque provider id
//! - [`NetworkInterface`] - an address with family and visibility

pub mod instance;
pub mod network;

pub use instance::{Instance, InstanceId};
pub use network::{AddressFamily, NetworkInterface, Visibility};
