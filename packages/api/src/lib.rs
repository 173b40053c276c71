//! # API crate: typed REST client for the SplitPro server
//!
//! The server owns every user, friend, group and expense and computes every
//! balance. This crate is the only place the frontend talks to it: it defines
//! the wire models, the HTTP client and the configuration that points the
//! client at a server.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one async method per endpoint, cookie credentials, CSRF header on state-changing verbs |
//! | [`config`] | [`ClientConfig`]: `splitpro.toml` plus compile-time environment overrides |
//! | [`csrf`] | Reading the `XSRF-TOKEN` cookie (browser document or native cookie jar) |
//! | [`error`] | [`ApiError`]: transport failures vs. server rejections with their message |
//! | [`models`] | camelCase JSON payloads: users, friends, groups, expenses, balances, support |
//!
//! ## Endpoints
//!
//! - **Authentication**: `current_user`, `login`, `signup`, `logout`, `forgot_password`
//! - **Friends**: `friends`, `add_friend`, `remove_friend`
//! - **Groups**: `groups`, `create_group`
//! - **Expenses**: `expenses`, `create_expense`, `balances`
//! - **Support**: `send_support`

pub mod client;
pub mod config;
pub mod csrf;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use models::*;
