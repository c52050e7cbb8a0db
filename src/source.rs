// Copyright (c) 2025 - Cowboy AI, Inc.
//! Instance Sources
//!
//! A source hands over the complete instance list in one piece. It either
//! succeeds with every record or fails; there is no partial hand-off, so the
//! builder never sees a truncated fleet.
//!
//! ```text
//! InstanceSource ──fetch_instances()──> [Instance] ──build()──> Inventory
//!    (async I/O)                          (owned)       (pure)
//! ```

use async_trait::async_trait;
use tracing::info;

use crate::domain::Instance;
use crate::errors::FetchError;
use crate::inventory::{build, Inventory};

/// Anything that can produce the current list of instances
#[async_trait]
pub trait InstanceSource: Send + Sync {
    /// Retrieve every instance
    async fn fetch_instances(&self) -> Result<Vec<Instance>, FetchError>;

    /// Name of this source, for logs
    fn name(&self) -> &str;
}

/// Fixed instance list, useful for tests and offline runs
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    instances: Vec<Instance>,
}

impl StaticSource {
    pub fn new(instances: Vec<Instance>) -> Self {
        Self { instances }
    }
}

#[async_trait]
impl InstanceSource for StaticSource {
    async fn fetch_instances(&self) -> Result<Vec<Instance>, FetchError> {
        Ok(self.instances.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Fetch from `source` and build the inventory
pub async fn generate<S>(source: &S) -> Result<Inventory, FetchError>
where
    S: InstanceSource + ?Sized,
{
    let instances = source.fetch_instances().await?;
    info!("Fetched {} instances from {}", instances.len(), source.name());
    Ok(build(&instances))
}
