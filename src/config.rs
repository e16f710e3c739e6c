//! Process configuration, loaded once by the host and handed to
//! [SlackClient](crate::SlackClient) at construction.

use crate::slack::api::API_BASE;
use dotenvy::dotenv;
use std::{env, fmt};
use tracing::warn;

/// The Slack app's OAuth client ID and secret.
#[derive(Clone, PartialEq, Eq)]
pub struct AppCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Never print the secret.
///
/// ```
/// let creds = courier::AppCredentials {
///     client_id: "123.456".into(),
///     client_secret: "hunter2".into(),
/// };
/// assert!(!format!("{:?}", creds).contains("hunter2"));
/// ```
impl fmt::Debug for AppCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Everything a [SlackClient](crate::SlackClient) needs up front.
#[derive(Clone, Debug)]
pub struct Config {
    pub credentials: AppCredentials,
    /// Overridable so tests and proxies can stand in for Slack.
    pub api_base: String,
}

impl Config {
    pub fn new(credentials: AppCredentials) -> Self {
        Config {
            credentials,
            api_base: API_BASE.into(),
        }
    }

    /// Read `$SLACK_CLIENT_ID`, `$SLACK_CLIENT_SECRET`, and optionally
    /// `$SLACK_API_BASE`, consulting a `.env` file first if there is one.
    ///
    /// Missing credentials aren't an error here. Slack will reject the token
    /// exchange later on, which is where the host finds out.
    pub fn from_env() -> Self {
        let has_dotenv = dotenv().is_ok();
        if !has_dotenv {
            warn!("No .env found");
        }

        let credentials = AppCredentials {
            client_id: var_or_warn("SLACK_CLIENT_ID"),
            client_secret: var_or_warn("SLACK_CLIENT_SECRET"),
        };

        let api_base = env::var("SLACK_API_BASE").unwrap_or_else(|_| API_BASE.into());

        Config {
            credentials,
            api_base,
        }
    }
}

fn var_or_warn(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        warn!("No ${} environment variable found", key);
        String::new()
    })
}
