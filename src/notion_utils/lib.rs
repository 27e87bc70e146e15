//! # notion-utils
//!
//! Stateless helpers for talking to Notion's private API: turning page URLs
//! into block ids, walking the nested JSON record maps the API returns, and
//! rewriting file URLs through Notion's signed proxy.
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, logging.rs) - the `nutil` binary    │
//! │  - The ONLY place that prints, reads stdin or exits         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - One `run` per subcommand, returning `Result<CmdResult>`  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Helpers (ids, path, urls) + config + error                 │
//! │  - Pure functions, safe to call from any thread             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`ids`]: Notion id extraction from URLs and bare tokens
//! - [`path`]: Dotted-path lookup in `serde_json::Value` trees
//! - [`urls`]: Signed file URL prefixing and unprefixing
//! - [`config`]: Service URL prefixes, persisted as `config.json`
//! - [`commands`]: Business logic behind each `nutil` subcommand
//! - [`error`]: Error types
//!
//! The library emits `tracing` events but never installs a subscriber.

pub mod commands;
pub mod config;
pub mod error;
pub mod ids;
pub mod path;
pub mod urls;

pub use error::{NotionError, Result};
pub use ids::{extract_id, NotionId};
pub use path::{get_by_path, get_by_path_or, get_by_path_or_null, to_list, KeyPath};
