use serde::{Serialize, Serializer};
use std::fmt;

/// Sum type representing every possible unexceptional fail state.
#[derive(Debug)]
pub enum SlackError {
    /// The request never got a usable response.
    Transport(reqwest::Error),
    /// Slack answered with `ok: false`.
    Platform {
        code: String,
        message: Option<String>,
    },
    /// Rejected before anything was sent.
    Validation(String),
}

impl SlackError {
    /// The bare reason, as exposed to callers of [Outcome]. Slack's own error
    /// codes pass through verbatim.
    pub fn reason(&self) -> String {
        match self {
            SlackError::Transport(e) => e.to_string(),
            SlackError::Platform { code, .. } => code.to_owned(),
            SlackError::Validation(e) => e.to_owned(),
        }
    }
}

impl From<reqwest::Error> for SlackError {
    fn from(e: reqwest::Error) -> Self {
        SlackError::Transport(e)
    }
}

impl fmt::Display for SlackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self {
            SlackError::Transport(e) => format!("Slack API request failed: {:?}", e),
            SlackError::Platform {
                code,
                message: None,
            } => format!("Slack API returned error: {}", code),
            SlackError::Platform {
                code,
                message: Some(m),
            } => format!("Slack API returned error: {} ({})", code, m),
            SlackError::Validation(e) => format!("Invalid request: {}", e),
        };

        write!(f, "{}", x)
    }
}

impl std::error::Error for SlackError {}

/// The result of any call made with an already-obtained token. Failures are
/// values here rather than `Err`s so that one bad call never takes down a
/// host driving many of them.
#[derive(Debug)]
pub enum Outcome<T> {
    Success(T),
    Failure(SlackError),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Outcome::Success(x) => Some(x),
            Outcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&SlackError> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(e) => Some(e),
        }
    }
}

impl<T> From<Result<T, SlackError>> for Outcome<T> {
    fn from(res: Result<T, SlackError>) -> Self {
        match res {
            Ok(x) => Outcome::Success(x),
            Err(e) => Outcome::Failure(e),
        }
    }
}

/// Serializes to `{"success": true, ...}` with the payload's fields inlined,
/// or `{"success": false, "error": "..."}`.
impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Success<'a, U> {
            success: bool,
            #[serde(flatten)]
            data: &'a U,
        }

        #[derive(Serialize)]
        struct Failure {
            success: bool,
            error: String,
        }

        match self {
            Outcome::Success(data) => Success {
                success: true,
                data,
            }
            .serialize(serializer),
            Outcome::Failure(e) => Failure {
                success: false,
                error: e.reason(),
            }
            .serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Payload {
        ts: String,
    }

    #[test]
    fn test_serialize_success_inlines_payload() {
        let x = Outcome::Success(Payload { ts: "1.2".into() });

        assert_eq!(
            serde_json::to_value(&x).unwrap(),
            json!({ "success": true, "ts": "1.2" })
        );
    }

    #[test]
    fn test_serialize_failure_passes_code_through() {
        let x: Outcome<Payload> = Outcome::Failure(SlackError::Platform {
            code: "channel_not_found".into(),
            message: None,
        });

        assert_eq!(
            serde_json::to_value(&x).unwrap(),
            json!({ "success": false, "error": "channel_not_found" })
        );
    }

    #[test]
    fn test_display() {
        let e = SlackError::Platform {
            code: "missing_scope".into(),
            message: Some("needed scope: chat:write".into()),
        };
        assert_eq!(
            e.to_string(),
            "Slack API returned error: missing_scope (needed scope: chat:write)"
        );

        let e = SlackError::Validation("empty text".into());
        assert_eq!(e.to_string(), "Invalid request: empty text");
    }
}
