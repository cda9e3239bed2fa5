//! urlcounts - classifies submitted URLs against a known-hosts list.
//!
//! The service exposes `POST /urlcounts`, which takes a JSON list of URLs
//! and returns per-host match counts plus the URLs that matched nothing.
//! `GET /` serves a single-page form that drives the endpoint from a
//! browser; the `submit` CLI subcommand drives it from a terminal.

pub mod api;
pub mod client;
pub mod counts;
pub mod hosts;
pub mod models;

pub use counts::aggregate;
pub use hosts::KnownHosts;
pub use models::dto::{UrlcountsRequest, UrlcountsResponse};
