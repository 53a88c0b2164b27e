//! Request helpers for the admin panel's `/admin` and `/auth` REST namespaces.
//!
//! # Overview
//! `RequestBuilder` turns (verb, prefix, path, body) into an `HttpRequest`
//! without touching the network. `AdminApi` runs the same operations through
//! a `Fetch` implementation and hands back the raw `HttpResponse`.
//!
//! # Design
//! - Every request carries `content-type: application/json`.
//! - Request paths are `prefix + path`, verbatim.
//! - Responses are never inspected by the helpers; status handling is the
//!   caller's call (see `HttpResponse::error_for_status`).
//! - `UreqFetch` resolves paths against `ClientConfig::origin`.

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod http;
pub mod types;

pub use client::{AdminApi, RequestBuilder};
pub use config::ClientConfig;
pub use error::ApiError;
pub use fetch::{Fetch, UreqFetch};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{JsonObject, Payload, Prefix};
