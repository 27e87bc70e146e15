//! # Notion identifiers
//!
//! Every block, page and collection in Notion is addressed by a UUID. Users hand
//! us those ids in many shapes: bare (dashed or not), or buried in a page URL
//! copied from the browser. This module reduces all of them to the canonical
//! lowercase dashed form.
//!
//! ## Accepted URL shapes
//!
//! ```text
//! https://www.notion.so/<id>                         plain page
//! https://www.notion.so/Some-Page-Title-<id>         human-readable slug
//! https://www.notion.so/ws/Page-<id>#<block-id>      "Copy link" on a block
//! https://www.notion.so/ws/<db-id>?v=<view>&p=<id>   legacy peek parameter
//! ```
//!
//! When a block fragment is present, the block id wins over the page id.
//!
//! ## Known limitation
//!
//! The slug handling keeps whatever follows the last `-`. A dashed id embedded
//! in a URL is therefore cut to its final group and rejected, and a URL whose
//! last segment has a hyphen but no id yields garbage that fails to parse.

use crate::config::BASE_URL;
use crate::error::{NotionError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// A validated Notion identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotionId(Uuid);

impl NotionId {
    /// Parses a bare id or a `www.notion.so` URL.
    pub fn parse(url_or_id: &str) -> Result<Self> {
        Self::parse_with_base(url_or_id, BASE_URL)
    }

    /// Like [`NotionId::parse`], with the URL prefix supplied by the caller.
    pub fn parse_with_base(url_or_id: &str, base_url: &str) -> Result<Self> {
        let candidate = match url_or_id.strip_prefix(base_url) {
            Some(rest) => id_part_of_url(rest),
            None => url_or_id,
        };

        match Uuid::try_parse(candidate) {
            Ok(uuid) => {
                tracing::debug!(input = url_or_id, id = %uuid, "extracted notion id");
                Ok(NotionId(uuid))
            }
            Err(e) => {
                tracing::debug!(input = url_or_id, candidate, error = %e, "not a notion id");
                Err(NotionError::InvalidIdentifier(url_or_id.to_string()))
            }
        }
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for NotionId {
    fn from(uuid: Uuid) -> Self {
        NotionId(uuid)
    }
}

impl std::fmt::Display for NotionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for NotionId {
    type Err = NotionError;

    fn from_str(s: &str) -> Result<Self> {
        NotionId::parse(s)
    }
}

/// Extracts the block/page id from a Notion URL, or validates a bare id.
///
/// Returns the lowercase dashed form, e.g. `"0123abcd-..."`.
///
/// # Examples
/// ```
/// use notion_utils::ids::extract_id;
///
/// let id = "0123456789abcdef0123456789abcdef";
/// let url = format!("https://www.notion.so/My-Page-{}", id);
/// assert_eq!(extract_id(&url).unwrap(), "01234567-89ab-cdef-0123-456789abcdef");
/// assert!(extract_id("not-an-id").is_err());
/// ```
pub fn extract_id(url_or_id: &str) -> Result<String> {
    NotionId::parse(url_or_id).map(|id| id.to_string())
}

/// Like [`extract_id`], for URLs under `base_url` instead of `www.notion.so`.
pub fn extract_id_with_base(url_or_id: &str, base_url: &str) -> Result<String> {
    NotionId::parse_with_base(url_or_id, base_url).map(|id| id.to_string())
}

/// Narrows the part of a URL after the base prefix down to the id candidate.
fn id_part_of_url(rest: &str) -> &str {
    let s = after_last(rest, "#");
    let s = after_last(s, "/");
    let s = after_last(s, "&p=");
    let s = before_first(s, "?");
    after_last(s, "-")
}

fn after_last<'a>(s: &'a str, pat: &str) -> &'a str {
    s.rsplit_once(pat).map_or(s, |(_, tail)| tail)
}

fn before_first<'a>(s: &'a str, pat: &str) -> &'a str {
    s.split_once(pat).map_or(s, |(head, _)| head)
}
