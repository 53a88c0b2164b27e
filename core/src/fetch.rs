//! The network seam: something that turns an `HttpRequest` into an
//! `HttpResponse`.
//!
//! # Design
//! `Fetch` is the only place I/O happens. `UreqFetch` is the blocking
//! implementation used in production and in the end-to-end tests; unit tests
//! substitute recorders. Status codes are never turned into errors here, only
//! failures to obtain a response are.

use std::fmt;

use ureq::typestate::WithBody;
use ureq::{Agent, RequestBuilder};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

pub trait Fetch {
    fn fetch(&self, req: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).fetch(req)
    }
}

/// Blocking transport over a pooled `ureq::Agent`.
#[derive(Clone)]
pub struct UreqFetch {
    agent: Agent,
    origin: String,
}

impl fmt::Debug for UreqFetch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqFetch").field("origin", &self.origin).finish_non_exhaustive()
    }
}

impl UreqFetch {
    pub fn new(config: &ClientConfig) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout())
            .build()
            .new_agent();
        Self {
            agent,
            origin: config.origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl Fetch for UreqFetch {
    fn fetch(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = format!("{}{}", self.origin, req.path);
        let body = req.body.as_deref();

        let result = match req.method {
            HttpMethod::Get => with_headers(self.agent.get(&url), &req.headers).call(),
            HttpMethod::Delete => {
                let builder = with_headers(self.agent.delete(&url), &req.headers);
                match body {
                    Some(body) => builder.force_send_body().send(body.as_bytes()),
                    None => builder.call(),
                }
            }
            HttpMethod::Post => send(with_headers(self.agent.post(&url), &req.headers), body),
            HttpMethod::Put => send(with_headers(self.agent.put(&url), &req.headers), body),
            HttpMethod::Patch => send(with_headers(self.agent.patch(&url), &req.headers), body),
        };

        let mut response = result.map_err(|e| {
            tracing::warn!(method = %req.method, %url, error = %e, "request failed");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        // No size cap and no decoding: the caller gets the bytes as sent.
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn send(
    builder: RequestBuilder<WithBody>,
    body: Option<&str>,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    match body {
        Some(body) => builder.send(body.as_bytes()),
        None => builder.send_empty(),
    }
}
