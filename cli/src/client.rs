//! `reqwest` transport for `descriptor::ApiRequest`.
//!
//! ERROR HANDLING
//! ==============
//! Mirrors the browser transport: connection failures become
//! `ApiError::Network`, response bodies go through
//! `descriptor::error::classify_response`. Nothing is retried.

use descriptor::request::{self, ApiRequest, HttpMethod};
use descriptor::{ApiError, MenuItem, Role, UiResponse, UserContext};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send `request` and return the decoded JSON body.
    ///
    /// # Errors
    ///
    /// `Network` when no response arrives, `Http` for non-2xx statuses and
    /// `Decode` for 2xx bodies that are not JSON.
    pub async fn send(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        let url = request.url(&self.base_url);
        let mut builder = self.http.request(reqwest_method(request.method), &url);
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.wire_body() {
            builder = builder.json(body);
        }

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            role = %request.role,
            ui = request.ui_request,
            "sending request"
        );
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(path = %request.path, error = %e, "request failed");
            ApiError::Network(e.to_string())
        })?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        tracing::info!(method = %request.method, path = %request.path, status, "response received");
        descriptor::error::classify_response(status, &text)
    }

    /// Fetch `endpoint` as a descriptor request and transform it for `role`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from [`ApiClient::send`].
    pub async fn fetch_descriptor(&self, endpoint: &str, role: Role) -> Result<UiResponse, ApiError> {
        let raw = self.send(&request::view_request(endpoint, role)).await?;
        Ok(descriptor::transform(&raw, role, endpoint))
    }

    /// `GET /api/menu-items`, filtered to `role`.
    ///
    /// # Errors
    ///
    /// Transport errors, or `Decode` when `menu_items` is missing or malformed.
    pub async fn menu_items(&self, role: Role) -> Result<Vec<MenuItem>, ApiError> {
        let raw = self.send(&request::menu_items(role)).await?;
        let items = raw
            .get("menu_items")
            .cloned()
            .ok_or_else(|| ApiError::Decode("missing menu_items".to_owned()))?;
        let items: Vec<MenuItem> = serde_json::from_value(items).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(items
            .into_iter()
            .filter(|item| item.is_visible_to(role.as_str()))
            .collect())
    }

    /// `GET /api/user-context/{role}`.
    ///
    /// # Errors
    ///
    /// Transport and decode errors.
    pub async fn user_context(&self, role: Role) -> Result<UserContext, ApiError> {
        let raw = self.send(&request::user_context(role)).await?;
        serde_json::from_value(raw).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}
