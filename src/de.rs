//! Field validators for Slack's `ok` flag.
//!
//! Slack signals success in-band, so a response only counts as one shape or
//! the other once `ok` has the right value. Used with
//! `#[serde(deserialize_with = "...")]`.

use serde::de::{Deserialize, Deserializer, Error};

/// Accept only `true`.
pub fn only_true<'a, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    exactly(deserializer, true)
}

/// Accept only `false`.
pub fn only_false<'a, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    exactly(deserializer, false)
}

fn exactly<'a, D>(deserializer: D, expected: bool) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    let b = bool::deserialize(deserializer)?;

    if b == expected {
        Ok(b)
    } else {
        Err(Error::custom(format!("expected `ok: {}`, got `ok: {}`", expected, b)))
    }
}
