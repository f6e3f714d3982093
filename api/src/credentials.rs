// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Credential resolution.
//!
//! Both credentials resolve through the same three tiers, in priority
//! order: an explicit override, an environment variable, and a fixed
//! per-user file. Resolution reads at most one small file and is
//! side-effect-free.

use std::path::PathBuf;

use tokio::fs;

use crate::error::ThirtyBoxesError;
use crate::types::{ApiKey, AuthToken};

/// Environment variable holding the API key.
pub const APIKEY_ENV: &str = "THIRTYBOXES_APIKEY";

/// Environment variable holding the authorized user token.
pub const AUTHTOKEN_ENV: &str = "THIRTYBOXES_AUTHTOKEN";

const CONFIG_DIR: &str = ".30boxes";
const APIKEY_FILE: &str = "apikey";
const AUTHTOKEN_FILE: &str = "authtoken";

/// Resolves the API key: explicit override, then [`APIKEY_ENV`], then
/// `~/.30boxes/apikey`.
pub async fn resolve_api_key(explicit: Option<String>) -> Option<ApiKey> {
    resolve("API key", explicit, APIKEY_ENV, APIKEY_FILE)
        .await
        .map(ApiKey::new)
}

/// Resolves the authorized user token: explicit override, then
/// [`AUTHTOKEN_ENV`], then `~/.30boxes/authtoken`.
pub async fn resolve_auth_token(explicit: Option<String>) -> Option<AuthToken> {
    resolve("auth token", explicit, AUTHTOKEN_ENV, AUTHTOKEN_FILE)
        .await
        .map(AuthToken::new)
}

async fn resolve(
    what: &str,
    explicit: Option<String>,
    env_var: &str,
    file_name: &str,
) -> Option<String> {
    if let Some(value) = explicit {
        tracing::debug!("using {what} given explicitly");
        return Some(value);
    }

    if let Ok(value) = std::env::var(env_var) {
        tracing::debug!("using {what} from the {env_var} environment variable");
        return Some(value);
    }

    let path = credential_path(file_name)?;
    match fs::read_to_string(&path).await {
        Ok(contents) => {
            tracing::debug!(path = %path.display(), "using {what} from file");
            Some(contents.trim().to_string())
        }
        Err(_) => None,
    }
}

fn credential_path(file_name: &str) -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(file_name))
}

pub(crate) fn missing_api_key() -> ThirtyBoxesError {
    ThirtyBoxesError::Config(format!(
        "could not determine API key:\n\
         \x20   1. pass the API key explicitly,\n\
         \x20   2. set the {APIKEY_ENV} environment variable, or\n\
         \x20   3. create `~/{CONFIG_DIR}/{APIKEY_FILE}`.\n\
         See `http://30boxes.com/api/` for information on getting an API key."
    ))
}

pub(crate) fn missing_auth_token() -> ThirtyBoxesError {
    ThirtyBoxesError::Config(format!(
        "could not determine auth token:\n\
         \x20   1. pass the auth token explicitly,\n\
         \x20   2. set the {AUTHTOKEN_ENV} environment variable, or\n\
         \x20   3. create `~/{CONFIG_DIR}/{AUTHTOKEN_FILE}`.\n\
         See `http://30boxes.com/api/#user.Authorize` for information on getting \
         an authorization token."
    ))
}
