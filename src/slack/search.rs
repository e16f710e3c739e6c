//! Search message history, optionally within a single channel.

use super::{
    api::*,
    auth::SlackAccessToken,
    error::{Outcome, SlackError},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One page of search hits. Records are passed through exactly as Slack
/// returns them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchMatches {
    pub matches: Vec<serde_json::Value>,
    pub total: u64,
}

pub type SearchResult = Outcome<SearchMatches>;

/// <https://api.slack.com/methods/search.messages#args>
#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

/// <https://api.slack.com/methods/search.messages#examples>
#[derive(Deserialize)]
struct SearchResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_true")]
    ok: bool,
    messages: MessagesMeta,
}

#[derive(Deserialize)]
struct MessagesMeta {
    #[serde(default)]
    total: u64,
    #[serde(default)]
    matches: Vec<serde_json::Value>,
}

impl SlackClient {
    /// Search messages visible to `token`. Requires a user token with
    /// `search:read`.
    ///
    /// `channel` may be an ID or a name. A name that can't be resolved drops
    /// the channel filter rather than failing, so the search runs across
    /// everything.
    pub async fn search_messages(
        &self,
        token: &SlackAccessToken,
        query: &str,
        channel: Option<&str>,
    ) -> SearchResult {
        let res = self.try_search_messages(token, query, channel).await;
        if let Err(e) = &res {
            warn!("Searching messages failed: {}", e);
        }

        res.into()
    }

    async fn try_search_messages(
        &self,
        token: &SlackAccessToken,
        query: &str,
        channel: Option<&str>,
    ) -> Result<SearchMatches, SlackError> {
        if query.trim().is_empty() {
            return Err(SlackError::Validation("query must not be empty".into()));
        }

        let channel_id = match channel {
            Some(c) => {
                let id = self.resolve_channel_id(token, c).await;
                if id.is_none() {
                    warn!("Unknown channel {}, searching everywhere instead", c);
                }
                id
            }
            None => None,
        };

        let full_query = with_channel(query, channel_id.as_deref());

        let res: APIResult<SearchResponse> = self
            .get("/search.messages", token)
            .query(&SearchRequest { query: &full_query })
            .send()
            .await?
            .json()
            .await?;

        let messages = res.into_result()?.messages;

        Ok(SearchMatches {
            matches: messages.matches,
            total: messages.total,
        })
    }
}

/// Append Slack's `in:` search modifier.
fn with_channel(query: &str, channel_id: Option<&str>) -> String {
    match channel_id {
        Some(id) => format!("{} in:{}", query, id),
        None => query.to_owned(),
    }
}
