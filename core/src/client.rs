//! Request builders and executing operations for the `/admin` and `/auth`
//! namespaces.
//!
//! # Design
//! `RequestBuilder` carries no state. Each (verb, prefix) pair gets a
//! `build_*` method that produces an `HttpRequest`. `AdminApi` pairs the same
//! operations with a `Fetch` implementation: build, fetch once, return the
//! response as-is. No status checks, no retries.
//!
//! Every request carries `content-type: application/json`, bodyless GETs
//! included. The two DELETE operations differ on purpose: the admin one always
//! sends a body (the text `undefined` when none is given), the auth one only
//! sends a body when the caller supplies it.

use serde::Serialize;

use crate::error::ApiError;
use crate::fetch::Fetch;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{JsonObject, Payload, Prefix};

pub const CONTENT_TYPE: &str = "content-type";
pub const APPLICATION_JSON: &str = "application/json";

/// Body sent by the admin DELETE when the caller passes none.
pub const UNDEFINED_BODY: &str = "undefined";

/// Stateless builder for every admin panel request.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestBuilder;

impl RequestBuilder {
    pub fn new() -> Self {
        Self
    }

    // -- /admin ------------------------------------------------------------

    pub fn build_get_resource(&self, path: &str) -> HttpRequest {
        request(HttpMethod::Get, Prefix::Admin, path, None)
    }

    pub fn build_post(&self, path: &str, body: Option<JsonObject>) -> Result<HttpRequest, ApiError> {
        let body = encode(&body.unwrap_or_default())?;
        Ok(request(HttpMethod::Post, Prefix::Admin, path, Some(body)))
    }

    pub fn build_put(&self, path: &str, body: Option<JsonObject>) -> Result<HttpRequest, ApiError> {
        let body = encode(&body.unwrap_or_default())?;
        Ok(request(HttpMethod::Put, Prefix::Admin, path, Some(body)))
    }

    pub fn build_patch(&self, path: &str, body: Option<JsonObject>) -> Result<HttpRequest, ApiError> {
        let body = encode(&body.unwrap_or_default())?;
        Ok(request(HttpMethod::Patch, Prefix::Admin, path, Some(body)))
    }

    /// The body field is always set. Without a body it is `undefined`.
    pub fn build_delete(&self, path: &str, body: Option<JsonObject>) -> Result<HttpRequest, ApiError> {
        let body = match body {
            Some(map) => encode(&map)?,
            None => UNDEFINED_BODY.to_string(),
        };
        Ok(request(HttpMethod::Delete, Prefix::Admin, path, Some(body)))
    }

    // -- /auth -------------------------------------------------------------

    pub fn build_get_auth_resource(&self, path: &str) -> HttpRequest {
        request(HttpMethod::Get, Prefix::Auth, path, None)
    }

    pub fn build_post_auth(&self, path: &str, body: Payload) -> Result<HttpRequest, ApiError> {
        let body = encode(&body)?;
        Ok(request(HttpMethod::Post, Prefix::Auth, path, Some(body)))
    }

    pub fn build_patch_auth(&self, path: &str, body: Option<Payload>) -> Result<HttpRequest, ApiError> {
        let body = encode(&body.unwrap_or_default())?;
        Ok(request(HttpMethod::Patch, Prefix::Auth, path, Some(body)))
    }

    pub fn build_put_auth(&self, path: &str, body: Option<JsonObject>) -> Result<HttpRequest, ApiError> {
        let body = encode(&body.unwrap_or_default())?;
        Ok(request(HttpMethod::Put, Prefix::Auth, path, Some(body)))
    }

    /// The body field is only set when `body` is `Some`.
    pub fn build_delete_resource(
        &self,
        path: &str,
        body: Option<JsonObject>,
    ) -> Result<HttpRequest, ApiError> {
        let body = body.as_ref().map(encode).transpose()?;
        Ok(request(HttpMethod::Delete, Prefix::Auth, path, body))
    }
}

/// Issues admin panel requests through a `Fetch` implementation.
///
/// Every method performs exactly one `fetch` and returns whatever response
/// came back, 4xx and 5xx included.
#[derive(Debug, Clone)]
pub struct AdminApi<F> {
    builder: RequestBuilder,
    fetch: F,
}

impl<F: Fetch> AdminApi<F> {
    pub fn new(fetch: F) -> Self {
        Self {
            builder: RequestBuilder::new(),
            fetch,
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetch
    }

    pub fn get_resource(&self, path: &str) -> Result<HttpResponse, ApiError> {
        self.send(self.builder.build_get_resource(path))
    }

    pub fn post(&self, path: &str, body: Option<JsonObject>) -> Result<HttpResponse, ApiError> {
        self.send(self.builder.build_post(path, body)?)
    }

    pub fn put(&self, path: &str, body: Option<JsonObject>) -> Result<HttpResponse, ApiError> {
        self.send(self.builder.build_put(path, body)?)
    }

    pub fn patch(&self, path: &str, body: Option<JsonObject>) -> Result<HttpResponse, ApiError> {
        self.send(self.builder.build_patch(path, body)?)
    }

    pub fn delete(&self, path: &str, body: Option<JsonObject>) -> Result<HttpResponse, ApiError> {
        self.send(self.builder.build_delete(path, body)?)
    }

    pub fn get_auth_resource(&self, path: &str) -> Result<HttpResponse, ApiError> {
        self.send(self.builder.build_get_auth_resource(path))
    }

    pub fn post_auth(&self, path: &str, body: Payload) -> Result<HttpResponse, ApiError> {
        self.send(self.builder.build_post_auth(path, body)?)
    }

    pub fn patch_auth(&self, path: &str, body: Option<Payload>) -> Result<HttpResponse, ApiError> {
        self.send(self.builder.build_patch_auth(path, body)?)
    }

    pub fn put_auth(&self, path: &str, body: Option<JsonObject>) -> Result<HttpResponse, ApiError> {
        self.send(self.builder.build_put_auth(path, body)?)
    }

    pub fn delete_resource(
        &self,
        path: &str,
        body: Option<JsonObject>,
    ) -> Result<HttpResponse, ApiError> {
        self.send(self.builder.build_delete_resource(path, body)?)
    }

    fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = %req.method, path = %req.path, has_body = req.body.is_some(), "sending request");
        let response = self.fetch.fetch(req)?;
        tracing::trace!(status = response.status, "response received");
        Ok(response)
    }
}

fn request(method: HttpMethod, prefix: Prefix, path: &str, body: Option<String>) -> HttpRequest {
    HttpRequest {
        method,
        path: prefix.join(path),
        headers: vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())],
        body,
    }
}

fn encode<T: Serialize + ?Sized>(body: &T) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))
}
