// Copyright (c) 2025 - Cowboy AI, Inc.

//! DigitalOcean Droplet Source
//!
//! Reads the droplet listing from the DigitalOcean v2 API and maps each
//! droplet to an [`Instance`].
//!
//! ```text
//! GET {api_url}/droplets   (Authorization: Bearer <token>)
//!        │
//!        ▼
//! DropletsResponse ──> [Droplet] ──> [Instance]
//! ```
//!
//! Only the first page of the listing is read. When the API reports more
//! pages a warning is logged and the remaining droplets are absent from the
//! inventory.
//!
//! # Example
//!
//! ```rust,no_run
//! use droplet_inventory::adapters::DigitalOceanClient;
//! use droplet_inventory::config::DigitalOceanConfig;
//! use droplet_inventory::source::InstanceSource;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DigitalOceanConfig {
//!         api_token: "your-token-here".to_string(),
//!         ..Default::default()
//!     };
//!
//!     let client = DigitalOceanClient::new(config)?;
//!     let instances = client.fetch_instances().await?;
//!     println!("{} droplets", instances.len());
//!
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::DigitalOceanConfig;
use crate::domain::{AddressFamily, Instance, InstanceId, NetworkInterface, Visibility};
use crate::errors::FetchError;
use crate::source::InstanceSource;

/// Response body of `GET /droplets`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DropletsResponse {
    #[serde(default)]
    pub droplets: Vec<Droplet>,

    #[serde(default)]
    pub links: Links,

    #[serde(default)]
    pub meta: Meta,
}

/// Pagination links
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub pages: Pages,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pages {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub total: u64,
}

/// A droplet, reduced to the fields inventory generation reads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Droplet {
    pub id: u64,
    pub name: String,
    pub region: Region,

    #[serde(default)]
    pub image: Option<Image>,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub networks: Networks,

    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub slug: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Networks {
    #[serde(default)]
    pub v4: Vec<NetworkV4>,
    #[serde(default)]
    pub v6: Vec<NetworkV6>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkV4 {
    pub ip_address: String,
    #[serde(default)]
    pub netmask: Option<String>,
    #[serde(default)]
    pub gateway: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkV6 {
    pub ip_address: String,
    #[serde(default)]
    pub netmask: Option<u8>,
    #[serde(default)]
    pub gateway: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<Droplet> for Instance {
    fn from(droplet: Droplet) -> Self {
        // IPv4 first, then IPv6, each in API order
        let v4 = droplet.networks.v4.into_iter().map(|net| {
            NetworkInterface::new(
                net.ip_address,
                AddressFamily::Ipv4,
                Visibility::from_provider(&net.kind),
            )
        });
        let v6 = droplet.networks.v6.into_iter().map(|net| {
            NetworkInterface::new(
                net.ip_address,
                AddressFamily::Ipv6,
                Visibility::from_provider(&net.kind),
            )
        });

        Instance {
            id: InstanceId::Numeric(droplet.id),
            name: droplet.name,
            region: droplet.region.slug,
            tags: droplet.tags,
            networks: v4.chain(v6).collect(),
        }
    }
}

/// Decode a `GET /droplets` body into instances
///
/// A body that does not parse is an error; it never degrades to an empty
/// list.
pub fn decode_droplets(body: &[u8]) -> Result<Vec<Instance>, FetchError> {
    let response: DropletsResponse = serde_json::from_slice(body)?;

    if let Some(next) = &response.links.pages.next {
        warn!(
            "Droplet listing has more pages (total {}); only the first {} droplets are included, next page: {}",
            response.meta.total,
            response.droplets.len(),
            next
        );
    }

    Ok(response.droplets.into_iter().map(Instance::from).collect())
}

/// DigitalOcean API client
pub struct DigitalOceanClient {
    config: DigitalOceanConfig,
    client: Client,
}

impl DigitalOceanClient {
    /// Create a client that authenticates every request with the configured token
    pub fn new(config: DigitalOceanConfig) -> Result<Self, FetchError> {
        info!("Using DigitalOcean API at {}", config.api_url);

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_token))
            .map_err(|e| FetchError::Client(format!("Invalid API token: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &DigitalOceanConfig {
        &self.config
    }

    /// Fetch and decode one page of droplets
    pub async fn fetch_droplets(&self) -> Result<Vec<Instance>, FetchError> {
        let url = format!("{}/droplets", self.config.api_url);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status.as_u16(), response.text().await));
        }

        let body = response.bytes().await.map_err(|e| FetchError::Transport {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        let instances = decode_droplets(&body)?;
        debug!("Decoded {} droplets", instances.len());
        Ok(instances)
    }
}

#[async_trait]
impl InstanceSource for DigitalOceanClient {
    async fn fetch_instances(&self) -> Result<Vec<Instance>, FetchError> {
        self.fetch_droplets().await
    }

    fn name(&self) -> &str {
        "digitalocean"
    }
}

/// Error for a non-success response, keeping whatever body could be read
fn status_error<E: std::fmt::Display>(status: u16, body: Result<String, E>) -> FetchError {
    let body = body.unwrap_or_else(|e| {
        warn!(status, error = %e, "Failed to read error response body");
        String::new()
    });
    FetchError::Status { status, body }
}
