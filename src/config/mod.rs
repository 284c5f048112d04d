use std::time::Duration;

use serde::Deserialize;

use crate::services::mapping::MappingSettings;
use crate::services::poller::PollPolicy;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Azure Document Intelligence resource endpoint
    pub azure_endpoint: String,

    /// Azure Document Intelligence subscription key
    pub azure_key: String,

    /// Vendor analysis model to run
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// Vendor REST API version
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Delay between operation status checks, in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Status checks allowed per request before giving up
    #[serde(default = "default_max_poll_attempts")]
    pub max_poll_attempts: u32,

    /// Consecutive failed status checks tolerated before giving up
    #[serde(default = "default_max_transport_retries")]
    pub max_transport_retries: u32,

    /// Minimum confidence for a line item to appear in the output
    #[serde(default)]
    pub min_item_confidence: f64,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_model_id() -> String {
    "prebuilt-invoice".to_string()
}

fn default_api_version() -> String {
    "2024-11-30".to_string()
}

fn default_poll_interval_ms() -> u64 {
    2000
}

fn default_max_poll_attempts() -> u32 {
    150
}

fn default_max_transport_retries() -> u32 {
    3
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy {
            interval: Duration::from_millis(self.poll_interval_ms),
            max_attempts: self.max_poll_attempts,
            max_transport_retries: self.max_transport_retries,
        }
    }

    pub fn mapping_settings(&self) -> MappingSettings {
        MappingSettings {
            min_item_confidence: self.min_item_confidence,
        }
    }
}
