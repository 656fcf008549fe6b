//! HTTP API Client
//!
//! JSON fetches against the dashboard's own `/api` routes.

use gloo_net::http::{Request, RequestBuilder};
use js_sys::{Array, Object, Reflect, JSON};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};

use crate::dom;
use crate::notify::{self, NotificationKind};

/// Methods accepted by [`api_call_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Parse a method name, ignoring case
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            "PATCH" => Some(HttpMethod::Patch),
            "DELETE" => Some(HttpMethod::Delete),
            _ => None,
        }
    }

    fn builder(self, url: &str) -> RequestBuilder {
        match self {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Put => Request::put(url),
            HttpMethod::Patch => Request::patch(url),
            HttpMethod::Delete => Request::delete(url),
        }
    }
}

/// The `fetch` settings a caller may add to a request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    /// Sent after the default `Content-Type`, so they can replace it
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    /// Read `{ method, headers, body }` from a JavaScript object
    ///
    /// `undefined` and `null` give the defaults. A body that is not a string
    /// is JSON-encoded.
    pub fn from_js(value: &JsValue) -> Result<Self, String> {
        let mut options = RequestOptions::default();
        if value.is_undefined() || value.is_null() {
            return Ok(options);
        }

        let method = field(value, "method");
        if let Some(name) = method.as_string() {
            options.method =
                HttpMethod::parse(&name).ok_or_else(|| format!("Unsupported method: {}", name))?;
        }

        if let Some(headers) = field(value, "headers").dyn_ref::<Object>() {
            for entry in Object::entries(headers).iter() {
                let pair: Array = entry.unchecked_into();
                if let (Some(key), Some(val)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                    options.headers.push((key, val));
                }
            }
        }

        let body = field(value, "body");
        if let Some(text) = body.as_string() {
            options.body = Some(text);
        } else if !body.is_undefined() && !body.is_null() {
            let encoded = JSON::stringify(&body).map_err(|_| "Body is not serializable".to_string())?;
            options.body = Some(encoded.into());
        }

        Ok(options)
    }
}

fn field(object: &JsValue, name: &str) -> JsValue {
    Reflect::get(object, &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED)
}

/// GET `endpoint` and decode its JSON body
pub async fn api_call<T: DeserializeOwned>(endpoint: &str) -> Result<T, String> {
    api_call_with(endpoint, &RequestOptions::default()).await
}

/// Send a request to `endpoint` and decode its JSON body
///
/// Failures are logged and shown as an error notification before being
/// returned.
pub async fn api_call_with<T: DeserializeOwned>(
    endpoint: &str,
    options: &RequestOptions,
) -> Result<T, String> {
    let result = fetch_json(endpoint, options).await;

    if let Err(e) = &result {
        dom::log_error(&format!("API call failed: {}", e));
        notify::show(&format!("Error: {}", e), NotificationKind::Error);
    }

    result
}

async fn fetch_json<T: DeserializeOwned>(
    endpoint: &str,
    options: &RequestOptions,
) -> Result<T, String> {
    let mut builder = options
        .method
        .builder(endpoint)
        .header("Content-Type", "application/json");
    for (key, value) in &options.headers {
        builder = builder.header(key, value);
    }

    let sent = match &options.body {
        Some(body) => builder
            .body(body.clone())
            .map_err(|e| format!("Request error: {}", e))?
            .send()
            .await,
        None => builder.send().await,
    };
    let response = sent.map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error! status: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
