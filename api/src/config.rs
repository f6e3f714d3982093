// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::types::{ApiKey, AuthToken};

/// Endpoint of the public 30boxes API.
pub const API_URL: &str = "http://30boxes.com/api/api.php";

/// 30boxes client configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key, if one was resolved.
    #[serde(default)]
    pub api_key: Option<ApiKey>,
    /// Authorized user token, if one was resolved.
    #[serde(default)]
    pub auth_token: Option<AuthToken>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    API_URL.to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("thirtyboxes-api/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            auth_token: None,
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
