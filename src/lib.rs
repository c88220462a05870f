//! Webhook relay
//!
//! Forwards named actions to pre-configured automation webhooks (MacroDroid,
//! Tasker and the like) and reports whether each forward succeeded.
//!
//! The pieces, bottom-up:
//!
//! - [`config`] - TOML configuration with env and CLI overrides
//! - [`registry`] - immutable action key → webhook table
//! - [`engine`] - dispatch, outcome classification and statistics
//! - [`api`] - axum routes in front of the engine
//! - [`cli`] - `relay` command-line interface

pub mod api;
pub mod cli;
pub mod config;
pub mod engine;
pub mod logging;
pub mod metrics;
pub mod registry;
