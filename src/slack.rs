//! The Slack Web API, as far as installing the app, finding channels,
//! searching, and posting goes.
//!
//! Everything hangs off [SlackClient]. Calls made with a token never return
//! `Err`: they return an [Outcome], or for listings an empty list, and log
//! whatever went wrong. Token exchange is the exception, as nothing can
//! happen without one.

pub mod api;
pub mod auth;
pub mod channel;
pub mod error;
pub mod message;
pub mod oauth;
pub mod search;

pub use api::SlackClient;
pub use auth::{SlackAccessToken, TokenKind};
pub use channel::Channel;
pub use error::{Outcome, SlackError};
pub use message::{SendResult, SentMessage};
pub use oauth::TokenResult;
pub use search::{SearchMatches, SearchResult};
