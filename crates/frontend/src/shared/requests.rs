//! HTTP client used by the generated pages.
//!
//! Every call takes the resolved url and the headers from the page
//! descriptor and returns the parsed body or a human readable error.

use contracts::shared::page_config::{HttpMethod, RequestHeaders};
use gloo_net::http::{Method, RequestBuilder, Response};
use leptos::prelude::*;
use serde_json::Value;

#[derive(Clone, Copy, Default)]
pub struct RequestsService;

impl RequestsService {
    pub fn new() -> Self {
        Self
    }

    pub async fn get(&self, url: &str, headers: &RequestHeaders) -> Result<Value, String> {
        self.send(HttpMethod::Get, url, headers).await
    }

    pub async fn delete(&self, url: &str, headers: &RequestHeaders) -> Result<Value, String> {
        self.send(HttpMethod::Delete, url, headers).await
    }

    /// Send a body-less request with an arbitrary verb
    pub async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        headers: &RequestHeaders,
    ) -> Result<Value, String> {
        log::debug!("{} {}", method.as_str(), url);

        let mut builder = RequestBuilder::new(url).method(to_gloo_method(method));
        for (name, value) in headers {
            builder = builder.header(name, value);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(status_error(&response).await);
        }

        read_body(response).await
    }
}

fn to_gloo_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

async fn status_error(response: &Response) -> String {
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    let body = body.trim();
    if body.is_empty() {
        format!("{} {}", status, status_text)
    } else {
        format!("{} {}: {}", status, status_text, body)
    }
}

/// Empty bodies (204, DELETE) become `null`, non-JSON bodies a JSON string
async fn read_body(response: Response) -> Result<Value, String> {
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
}

pub fn use_requests() -> RequestsService {
    use_context::<RequestsService>().expect("RequestsService not provided in context")
}
