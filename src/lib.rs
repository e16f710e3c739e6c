//! A small client for acting in Slack on a user's behalf: installing the app
//! via OAuth, listing and finding channels, searching messages, and posting.
//!
//! ```no_run
//! use courier::{Config, SlackClient};
//!
//! # async fn run() -> Result<(), courier::TokenExchangeError> {
//! let client = SlackClient::from_config(Config::from_env());
//!
//! let url = client.authorization_url("https://example.com/callback", "some-state");
//! // ...redirect the user to `url`, then with the `code` they come back with:
//! let token = client
//!     .exchange_code_for_token("code", "https://example.com/callback")
//!     .await?;
//!
//! let sent = client
//!     .send_message(&token.access_token, "C024BE91L", "Hello!")
//!     .await;
//! if !sent.is_success() {
//!     // ...
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod de;
mod error;
pub mod slack;

pub use config::{AppCredentials, Config};
pub use error::TokenExchangeError;
pub use slack::{
    Channel, Outcome, SearchMatches, SearchResult, SendResult, SentMessage, SlackAccessToken,
    SlackClient, SlackError, TokenKind, TokenResult,
};
