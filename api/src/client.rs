// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Client for the 30boxes.com calendar API.

use std::sync::Arc;

use reqwest::Url;

use crate::config::ApiConfig;
use crate::credentials;
use crate::decode::decode;
use crate::error::ThirtyBoxesError;
use crate::http::HttpClient;
use crate::request::{ApiMethod, ApiRequest};
use crate::table::{self, DecodeTable};
use crate::types::{ApiKey, AuthToken, DatePoint};
use crate::value::Value;

/// Client for the 30boxes.com calendar API.
///
/// Each operation issues one GET against the API endpoint and decodes
/// the XML response into a [`Value`] tree. Operations that the API
/// gates behind a credential fail with a configuration error when that
/// credential was not resolved.
///
/// # Example
///
/// ```ignore
/// use thirtyboxes_api::{ApiConfig, ThirtyBoxes};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ApiConfig {
///     api_key: Some("my-api-key".into()),
///     ..Default::default()
/// };
///
/// let api = ThirtyBoxes::new(config)?;
/// let pong = api.ping().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ThirtyBoxes {
    http: Arc<HttpClient>,
    config: ApiConfig,
}

impl ThirtyBoxes {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: ApiConfig) -> Result<Self, ThirtyBoxesError> {
        let http = HttpClient::new(&config)?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// Creates a client with the default endpoint, resolving both
    /// credentials from the environment and the per-user files.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails. Missing
    /// credentials are not an error here; the operations that need
    /// them report one.
    pub async fn from_env() -> Result<Self, ThirtyBoxesError> {
        let config = ApiConfig {
            api_key: credentials::resolve_api_key(None).await,
            auth_token: credentials::resolve_auth_token(None).await,
            ..Default::default()
        };
        Self::new(config)
    }

    /// Pings the API, verifying the API key.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a `fail` envelope, an
    /// undecodable response, or a missing API key.
    pub async fn ping(&self) -> Result<Value, ThirtyBoxesError> {
        let request = ApiRequest::new(ApiMethod::Ping).param("apiKey", self.api_key()?.as_str());
        self.call(request, &table::PING).await
    }

    /// Gets public info for a user, by id or email.
    ///
    /// A numeric argument resolves through `user.FindById`, anything
    /// else through `user.FindByEmail`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a `fail` envelope, an
    /// undecodable response, or a missing API key.
    pub async fn find_user(&self, id_or_email: &str) -> Result<Value, ThirtyBoxesError> {
        let request = if id_or_email.trim().parse::<i64>().is_ok() {
            ApiRequest::new(ApiMethod::UserFindById).param("id", id_or_email)
        } else {
            ApiRequest::new(ApiMethod::UserFindByEmail).param("email", id_or_email)
        };
        let request = request.param("apiKey", self.api_key()?.as_str());
        self.call(request, &table::USER).await
    }

    /// Gets all info on the authorized user.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a `fail` envelope, an
    /// undecodable response, or a missing credential.
    pub async fn all_user_info(&self) -> Result<Value, ThirtyBoxesError> {
        let request = ApiRequest::new(ApiMethod::UserGetAllInfo)
            .param("apiKey", self.api_key()?.as_str())
            .param("authorizedUserToken", self.auth_token()?.as_str());
        self.call(request, &table::USER).await
    }

    /// Gets the authorized user's events in the given date range.
    ///
    /// `start` defaults server-side to today and `end` to `start` plus
    /// 90 days; the API rejects ranges longer than its documented cap.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a `fail` envelope, an
    /// undecodable response, or a missing credential.
    pub async fn events(
        &self,
        start: Option<DatePoint>,
        end: Option<DatePoint>,
    ) -> Result<Value, ThirtyBoxesError> {
        let request = ApiRequest::new(ApiMethod::EventsGet)
            .optional_param("start", start.map(|p| p.to_string()))
            .optional_param("end", end.map(|p| p.to_string()))
            .param("apiKey", self.api_key()?.as_str())
            .param("authorizedUserToken", self.auth_token()?.as_str());
        self.call(request, &table::EVENTS).await
    }

    /// Returns the authorized user's events matching a free-text query.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a `fail` envelope, an
    /// undecodable response, or a missing credential.
    pub async fn search(&self, query: &str) -> Result<Value, ThirtyBoxesError> {
        let request = ApiRequest::new(ApiMethod::EventsSearch)
            .param("query", query)
            .param("apiKey", self.api_key()?.as_str())
            .param("authorizedUserToken", self.auth_token()?.as_str());
        self.call(request, &table::EVENTS).await
    }

    /// Returns the authorized user's events carrying the given tag.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a `fail` envelope, an
    /// undecodable response, or a missing credential.
    pub async fn tag_search(&self, tag: &str) -> Result<Value, ThirtyBoxesError> {
        let request = ApiRequest::new(ApiMethod::EventsTagSearch)
            .param("tag", tag)
            .param("apiKey", self.api_key()?.as_str())
            .param("authorizedUserToken", self.auth_token()?.as_str());
        self.call(request, &table::EVENTS).await
    }

    /// Builds the `user.Authorize` URL for the browser flow that grants
    /// an authorization token.
    ///
    /// # Errors
    ///
    /// Returns an error on a missing API key or an invalid base URL.
    pub fn authorize_url(
        &self,
        app_name: &str,
        app_logo_url: Option<&str>,
        return_url: Option<&str>,
    ) -> Result<Url, ThirtyBoxesError> {
        ApiRequest::new(ApiMethod::UserAuthorize)
            .param("applicationName", app_name)
            .optional_param("applicationLogoUrl", app_logo_url)
            .optional_param("returnUrl", return_url)
            .param("apiKey", self.api_key()?.as_str())
            .url(&self.config.base_url)
    }

    /// Builds the `getKeyForUser` URL, which shows the logged-in user
    /// their API key in a browser.
    ///
    /// # Errors
    ///
    /// Returns an error on an invalid base URL.
    pub fn api_key_url(&self) -> Result<Url, ThirtyBoxesError> {
        ApiRequest::new(ApiMethod::GetKeyForUser).url(&self.config.base_url)
    }

    fn api_key(&self) -> Result<&ApiKey, ThirtyBoxesError> {
        self.config
            .api_key
            .as_ref()
            .ok_or_else(credentials::missing_api_key)
    }

    fn auth_token(&self) -> Result<&AuthToken, ThirtyBoxesError> {
        self.config
            .auth_token
            .as_ref()
            .ok_or_else(credentials::missing_auth_token)
    }

    async fn call(
        &self,
        request: ApiRequest,
        table: &DecodeTable,
    ) -> Result<Value, ThirtyBoxesError> {
        let url = request.url(&self.config.base_url)?;
        let raw = self.http.get(url).await?;
        decode(&raw, table)
    }
}
