// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Request building for API calls.

use reqwest::Url;

use crate::error::ThirtyBoxesError;

/// The wire method names of the 30boxes API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ApiMethod {
    Ping,
    UserFindByEmail,
    UserFindById,
    UserAuthorize,
    UserGetAllInfo,
    EventsGet,
    EventsSearch,
    EventsTagSearch,
    GetKeyForUser,
}

impl ApiMethod {
    pub(crate) const fn name(self) -> &'static str {
        match self {
            Self::Ping => "test.Ping",
            Self::UserFindByEmail => "user.FindByEmail",
            Self::UserFindById => "user.FindById",
            Self::UserAuthorize => "user.Authorize",
            Self::UserGetAllInfo => "user.GetAllInfo",
            Self::EventsGet => "events.Get",
            Self::EventsSearch => "events.Search",
            Self::EventsTagSearch => "events.TagSearch",
            Self::GetKeyForUser => "getKeyForUser",
        }
    }
}

/// An API request: a method plus named query parameters.
///
/// Absent parameters are omitted from the query string entirely;
/// present values are percent-encoded by the URL serializer.
#[derive(Debug)]
pub(crate) struct ApiRequest {
    method: ApiMethod,
    params: Vec<(&'static str, String)>,
}

impl ApiRequest {
    pub(crate) const fn new(method: ApiMethod) -> Self {
        Self {
            method,
            params: Vec::new(),
        }
    }

    pub(crate) fn param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.push((name, value.into()));
        self
    }

    pub(crate) fn optional_param(
        self,
        name: &'static str,
        value: Option<impl Into<String>>,
    ) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    /// Renders the full request URL against the given base.
    pub(crate) fn url(&self, base: &str) -> Result<Url, ThirtyBoxesError> {
        let mut url = Url::parse(base)
            .map_err(|e| ThirtyBoxesError::Config(format!("invalid base URL {base:?}: {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("method", self.method.name());
            for (name, value) in &self.params {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://30boxes.com/api/api.php";

    #[test]
    fn url_carries_method_and_params() {
        let url = ApiRequest::new(ApiMethod::UserFindById)
            .param("id", "1741")
            .param("apiKey", "secret")
            .url(BASE)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://30boxes.com/api/api.php?method=user.FindById&id=1741&apiKey=secret"
        );
    }

    #[test]
    fn url_percent_encodes_values() {
        let url = ApiRequest::new(ApiMethod::EventsSearch)
            .param("query", "bike to work")
            .url(BASE)
            .unwrap();
        assert!(url.as_str().contains("query=bike+to+work"));
    }

    #[test]
    fn absent_params_are_omitted() {
        let url = ApiRequest::new(ApiMethod::EventsGet)
            .optional_param("start", Some("2006-02-06"))
            .optional_param("end", None::<String>)
            .url(BASE)
            .unwrap();
        assert!(url.as_str().contains("start=2006-02-06"));
        assert!(!url.as_str().contains("end="));
    }

    #[test]
    fn invalid_base_is_a_config_error() {
        let result = ApiRequest::new(ApiMethod::Ping).url("not a url");
        assert!(matches!(result, Err(ThirtyBoxesError::Config(_))));
    }
}
