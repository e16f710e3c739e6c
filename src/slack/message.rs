//! Post plain-text messages to any given Slack channel.

use super::{
    api::*,
    auth::{infer_token_kind, SlackAccessToken, TokenKind},
    error::{Outcome, SlackError},
};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};
use tracing::{debug, warn};

/// A message Slack has accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SentMessage {
    /// Slack's `ts`, which doubles as the message ID.
    pub timestamp: String,
    pub channel: String,
    pub text: String,
    /// Whether Slack attributed the message to the user or to the app.
    pub posted_as: TokenKind,
}

pub type SendResult = Outcome<SentMessage>;

/// <https://api.slack.com/methods/chat.postMessage#args>
#[derive(Serialize)]
struct MessageRequest<'a> {
    channel: &'a str,
    text: &'a str,
}

/// <https://api.slack.com/methods/chat.postMessage#examples>
#[derive(Deserialize)]
struct MessageResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_true")]
    ok: bool,
    channel: String,
    ts: String,
    #[serde(default)]
    message: Option<PostedMessage>,
}

/// The echo of what was posted.
#[serde_as]
#[derive(Deserialize)]
struct PostedMessage {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    bot_id: Option<String>,
}

impl SlackClient {
    /// Post `text` to a channel as whoever `token` belongs to. Failures of
    /// any kind come back as [Outcome::Failure].
    pub async fn send_message(
        &self,
        token: &SlackAccessToken,
        channel_id: &str,
        text: &str,
    ) -> SendResult {
        debug!(
            channel = channel_id,
            inferred_token_kind = ?infer_token_kind(token),
            "Posting message"
        );

        let res = self.try_send_message(token, channel_id, text).await;
        if let Err(e) = &res {
            warn!("Posting message to {} failed: {}", channel_id, e);
        }

        res.into()
    }

    async fn try_send_message(
        &self,
        token: &SlackAccessToken,
        channel_id: &str,
        text: &str,
    ) -> Result<SentMessage, SlackError> {
        if channel_id.trim().is_empty() {
            return Err(SlackError::Validation("channel must not be empty".into()));
        }
        if text.trim().is_empty() {
            return Err(SlackError::Validation("text must not be empty".into()));
        }

        let res: APIResult<MessageResponse> = self
            .post("/chat.postMessage", token)
            .json(&MessageRequest {
                channel: channel_id,
                text,
            })
            .send()
            .await?
            .json()
            .await?;

        let res = res.into_result()?;

        Ok(SentMessage {
            timestamp: res.ts,
            channel: res.channel,
            text: text.to_owned(),
            posted_as: posted_as(res.message.as_ref()),
        })
    }
}

/// Slack only echoes a `bot_id` when the message went out under the app's
/// identity.
fn posted_as(echo: Option<&PostedMessage>) -> TokenKind {
    match echo.and_then(|m| m.bot_id.as_ref()) {
        Some(_) => TokenKind::Bot,
        None => TokenKind::User,
    }
}
