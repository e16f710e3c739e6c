use std::fmt;

/// Every way exchanging an OAuth code for a token can fail. Unlike the rest
/// of the crate this is raised rather than folded into an
/// [Outcome](crate::Outcome), as nothing else can happen without a token.
#[derive(Debug)]
pub enum TokenExchangeError {
    Transport(reqwest::Error),
    /// Slack responded with something other than `200 OK`.
    Status(u16),
    /// Slack responded `ok: false` with this error.
    Platform(String),
    MalformedPayload(String),
}

impl From<reqwest::Error> for TokenExchangeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            TokenExchangeError::MalformedPayload(e.to_string())
        } else {
            TokenExchangeError::Transport(e)
        }
    }
}

impl fmt::Display for TokenExchangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self {
            TokenExchangeError::Transport(e) => format!("Token exchange request failed: {:?}", e),
            TokenExchangeError::Status(s) => format!("Token exchange failed: {}", s),
            TokenExchangeError::Platform(e) => format!("Slack OAuth error: {}", e),
            TokenExchangeError::MalformedPayload(e) => {
                format!("Slack OAuth returned an unexpected payload: {}", e)
            }
        };

        write!(f, "{}", x)
    }
}

impl std::error::Error for TokenExchangeError {}
