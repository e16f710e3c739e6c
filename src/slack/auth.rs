//! Helpers around Slack's use of OAuth Bearer Authentication.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A newtype wrapper around Slack access tokens.
#[derive(PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub struct SlackAccessToken(pub String);

impl From<&str> for SlackAccessToken {
    fn from(s: &str) -> Self {
        SlackAccessToken(s.into())
    }
}

impl From<String> for SlackAccessToken {
    fn from(s: String) -> Self {
        SlackAccessToken(s)
    }
}

/// Tokens end up in logs via `Debug` on request types, so only show the
/// prefix.
impl fmt::Debug for SlackAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(5).collect();
        write!(f, "SlackAccessToken({}...)", prefix)
    }
}

/// Convert a Slack access token to a `Bearer` `Authorization` header value.
///
/// ```
/// use courier::slack::auth::{to_auth_header_val, SlackAccessToken};
///
/// let token = SlackAccessToken("xoxb-foo".into());
/// assert_eq!(to_auth_header_val(&token), "Bearer xoxb-foo");
/// ```
pub fn to_auth_header_val(t: &SlackAccessToken) -> String {
    format!("Bearer {}", t.0)
}

/// Who actions taken with a token are attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// The human who authorised the app.
    User,
    /// The app's own identity.
    Bot,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::User => write!(f, "user"),
            TokenKind::Bot => write!(f, "bot"),
        }
    }
}

/// Guess the kind of a token from Slack's prefix convention.
///
/// This is only a heuristic for diagnostics. It isn't authoritative and can
/// disagree with the kind recorded when the token was issued.
///
/// ```
/// use courier::slack::auth::{infer_token_kind, SlackAccessToken, TokenKind};
///
/// assert_eq!(infer_token_kind(&SlackAccessToken("xoxp-1".into())), Some(TokenKind::User));
/// assert_eq!(infer_token_kind(&SlackAccessToken("xoxb-1".into())), Some(TokenKind::Bot));
/// assert_eq!(infer_token_kind(&SlackAccessToken("xapp-1".into())), None);
/// ```
pub fn infer_token_kind(t: &SlackAccessToken) -> Option<TokenKind> {
    if t.0.starts_with("xoxp-") {
        Some(TokenKind::User)
    } else if t.0.starts_with("xoxb-") {
        Some(TokenKind::Bot)
    } else {
        None
    }
}
