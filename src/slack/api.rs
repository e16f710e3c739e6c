//! Type definitions and helpers for the Slack API.

use super::{auth::*, error::SlackError};
use crate::config::{AppCredentials, Config};
use serde::Deserialize;

/// The base URL of the Slack API.
pub const API_BASE: &str = "https://slack.com/api";

/// The client through which every Slack call is made.
///
/// Holds a connection pool internally, as per [reqwest::Client], so it's
/// cheap to clone and fine to share between tasks. Nothing else is mutable:
/// each call is scoped to the access token it's given.
#[derive(Clone, Debug)]
pub struct SlackClient {
    pub(super) http: reqwest::Client,
    pub(super) base: String,
    pub(super) credentials: AppCredentials,
}

impl SlackClient {
    pub fn new(base: String, credentials: AppCredentials) -> Self {
        SlackClient {
            http: reqwest::Client::new(),
            base,
            credentials,
        }
    }

    pub fn from_config(config: Config) -> Self {
        SlackClient::new(config.api_base, config.credentials)
    }

    /// Create a GET request to any Slack API endpoint, handling authentication.
    pub(super) fn get<T: ToString>(
        &self,
        path: T,
        token: &SlackAccessToken,
    ) -> reqwest::RequestBuilder {
        self.http
            .get(self.url(path))
            .header(reqwest::header::AUTHORIZATION, to_auth_header_val(token))
    }

    /// Create a POST request to any Slack API endpoint, handling authentication.
    pub(super) fn post<T: ToString>(
        &self,
        path: T,
        token: &SlackAccessToken,
    ) -> reqwest::RequestBuilder {
        self.http
            .post(self.url(path))
            .header(reqwest::header::AUTHORIZATION, to_auth_header_val(token))
    }

    /// Create a POST request with no bearer token, for the OAuth endpoints
    /// which authenticate the app via its credentials instead.
    pub(super) fn post_unauthenticated<T: ToString>(&self, path: T) -> reqwest::RequestBuilder {
        self.http.post(self.url(path))
    }

    fn url<T: ToString>(&self, path: T) -> String {
        self.base.to_owned() + &path.to_string()
    }
}

/// Slack's API returns a common "untagged" response, representing whether a
/// request was successful.
///
/// ```json
/// {
///     "ok": true,
///     "channels": []
/// }
/// ```
///
/// ```json
/// {
///     "ok": false,
///     "error": "invalid_auth"
/// }
/// ```
#[derive(Deserialize)]
#[serde(untagged)]
pub enum APIResult<T> {
    Ok(T),
    Err(ErrorResponse),
}

impl<T> APIResult<T> {
    /// Collapse into a [Result], promoting Slack's error to a [SlackError].
    pub fn into_result(self) -> Result<T, SlackError> {
        match self {
            APIResult::Ok(x) => Ok(x),
            APIResult::Err(e) => Err(e.into()),
        }
    }
}

/// The universal response in case of an unsuccessful request.
// Every success type must check `ok` with `only_true` too, otherwise an error
// response could deserialize as a success with all-default fields.
#[derive(Deserialize)]
pub struct ErrorResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_false")]
    ok: bool,
    pub error: String,
    /// Present alongside `missing_scope`.
    #[serde(default)]
    pub needed: Option<String>,
}

impl From<ErrorResponse> for SlackError {
    fn from(e: ErrorResponse) -> Self {
        SlackError::Platform {
            code: e.error,
            message: e.needed.map(|scope| format!("needed scope: {}", scope)),
        }
    }
}
