//! Client configuration
//!
//! Built with `ClientConfig::default()` plus `with_*` overrides, or read
//! from the environment with [`ClientConfig::from_env`]:
//!
//! | variable           | meaning                                  |
//! |--------------------|------------------------------------------|
//! | `DMS_REGION`       | region (takes precedence)                |
//! | `AWS_REGION`       | region                                   |
//! | `DMS_ENDPOINT_URL` | endpoint override, e.g. a local stub     |

use crate::error::{ClientError, Result};

pub const DEFAULT_REGION: &str = "us-east-1";

pub const REGION_ENV: &str = "DMS_REGION";
pub const AWS_REGION_ENV: &str = "AWS_REGION";
pub const ENDPOINT_ENV: &str = "DMS_ENDPOINT_URL";

/// Where and how the client talks to the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    region: String,
    endpoint: Option<String>,
    user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            region: DEFAULT_REGION.to_string(),
            endpoint: None,
            user_agent: concat!("dms-sdk-rust/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = ClientConfig::default();
        if let Some(region) = get(REGION_ENV).or_else(|| get(AWS_REGION_ENV)) {
            config = config.with_region(region);
        }
        if let Some(endpoint) = get(ENDPOINT_ENV) {
            config = config.with_endpoint(endpoint);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into().trim().to_string();
        self
    }

    /// Pin the endpoint; it no longer follows the region.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into().trim().trim_end_matches('/').to_string());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// The pinned endpoint, or the regional one.
    pub fn endpoint(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => regional_endpoint(&self.region),
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn validate(&self) -> Result<()> {
        if self.region.is_empty() {
            return Err(ClientError::InvalidConfig("region must not be empty".into()));
        }
        if !is_region_name(&self.region) {
            return Err(ClientError::InvalidConfig(format!(
                "region may only contain a-z, 0-9 and '-', got {:?}",
                self.region
            )));
        }
        let endpoint = self.endpoint();
        let host = endpoint
            .strip_prefix("https://")
            .or_else(|| endpoint.strip_prefix("http://"))
            .ok_or_else(|| {
                ClientError::InvalidConfig(format!(
                    "endpoint must start with http:// or https://, got {endpoint:?}"
                ))
            })?;
        if host.is_empty() {
            return Err(ClientError::InvalidConfig(format!(
                "endpoint has no host: {endpoint:?}"
            )));
        }
        Ok(())
    }
}

fn is_region_name(region: &str) -> bool {
    region
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Default endpoint for `region`.
pub fn regional_endpoint(region: &str) -> String {
    if region.starts_with("cn-") {
        format!("https://dms.{region}.amazonaws.com.cn")
    } else {
        format!("https://dms.{region}.amazonaws.com")
    }
}
