/*
[INPUT]:  Region name and optional endpoint override
[OUTPUT]: Resolved service endpoint URL for encoded requests
[POS]:    Config layer - where encoded requests are addressed
[UPDATE]: When adding partitions or endpoint options
*/

use url::Url;

use crate::error::{ComprehendError, Result};

/// Region used when none is configured
pub const DEFAULT_REGION: &str = "us-east-1";

/// Service endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub region: String,
    /// Replaces the regional endpoint when set (VPC endpoints, local mocks)
    pub endpoint: Option<Url>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint: None,
        }
    }
}

impl ServiceConfig {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            endpoint: None,
        }
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Parse and set an endpoint override
    pub fn with_endpoint_str(self, endpoint: &str) -> Result<Self> {
        Ok(self.with_endpoint(Url::parse(endpoint)?))
    }

    /// Endpoint requests are sent to
    pub fn resolve_endpoint(&self) -> Result<Url> {
        if let Some(endpoint) = &self.endpoint {
            return Ok(endpoint.clone());
        }

        let region = self.region.trim();
        if region.is_empty() {
            return Err(ComprehendError::Config(
                "region must not be empty".to_string(),
            ));
        }

        let suffix = if region.starts_with("cn-") {
            "amazonaws.com.cn"
        } else {
            "amazonaws.com"
        };
        Ok(Url::parse(&format!("https://comprehend.{region}.{suffix}/"))?)
    }
}
