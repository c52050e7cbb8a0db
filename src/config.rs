// Copyright (c) 2025 - Cowboy AI, Inc.
//! DigitalOcean connection settings
//!
//! Loaded from the environment:
//!
//! | Variable          | Required | Default                            |
//! |-------------------|----------|------------------------------------|
//! | `DO_TOKEN`        | yes      |                                    |
//! | `DO_API_URL`      | no       | `https://api.digitalocean.com/v2`  |
//! | `DO_TIMEOUT_SECS` | no       | `30`                               |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{ConfigError, MissingVariable};

pub const TOKEN_VAR: &str = "DO_TOKEN";
pub const API_URL_VAR: &str = "DO_API_URL";
pub const TIMEOUT_VAR: &str = "DO_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "https://api.digitalocean.com/v2";

/// Variables that must be present, with a description for error messages
const REQUIRED_VARS: &[MissingVariable] = &[MissingVariable {
    name: TOKEN_VAR,
    description: "The Digital Ocean token API access key",
}];

/// Configuration for the DigitalOcean API client
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalOceanConfig {
    /// API base URL, without trailing slash
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Personal access token sent as a bearer token
    pub api_token: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for DigitalOceanConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_token: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

// Keeps the token out of logs.
impl fmt::Debug for DigitalOceanConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigitalOceanConfig")
            .field("api_url", &self.api_url)
            .field("api_token", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl DigitalOceanConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Every missing required variable is reported, not just the first.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing: Vec<MissingVariable> = REQUIRED_VARS
            .iter()
            .filter(|var| lookup(var.name).is_none())
            .cloned()
            .collect();

        if !missing.is_empty() {
            return Err(ConfigError::MissingVariables(missing));
        }

        let api_token = lookup(TOKEN_VAR).unwrap_or_default();

        let api_url = lookup(API_URL_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(default_api_url);

        let timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                name: TIMEOUT_VAR,
                reason: format!("{:?} is not a number of seconds: {}", raw, e),
            })?,
            None => default_timeout(),
        };

        Ok(Self {
            api_url,
            api_token,
            timeout_secs,
        })
    }
}
