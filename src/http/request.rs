use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::error::RequestError;

use super::method::HttpMethod;

/// A request as composed in the form, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Sent as given; names may repeat.
    pub headers: Vec<(String, String)>,
    /// Appended to the URL for GET only. Keys are unique.
    pub query_params: Vec<(String, String)>,
    /// Sent verbatim for POST only.
    pub body: String,
}

/// A validated request ready to go on the wire.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl OutboundRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            query_params: Vec::new(),
            body: String::new(),
        }
    }

    /// Validate and normalize without touching the network.
    pub fn prepare(&self) -> Result<PreparedRequest, RequestError> {
        let mut url = parse_absolute_url(&self.url)?;

        if self.method == HttpMethod::Get && !self.query_params.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query_params.iter());
        }

        let mut headers = HeaderMap::new();
        for (key, value) in &self.headers {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                RequestError::InvalidHeader {
                    name: key.clone(),
                    reason: e.to_string(),
                }
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| RequestError::InvalidHeader {
                name: key.clone(),
                reason: e.to_string(),
            })?;
            headers.append(name, value);
        }

        let body = match self.method {
            HttpMethod::Get => None,
            HttpMethod::Post => {
                if is_json(&self.body) && !headers.contains_key(CONTENT_TYPE) {
                    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                }
                Some(self.body.clone())
            }
        };

        Ok(PreparedRequest {
            method: self.method,
            url,
            headers,
            body,
        })
    }
}

/// Accepts only `http`/`https` URLs that carry a host.
pub fn parse_absolute_url(raw: &str) -> Result<Url, RequestError> {
    let raw = raw.trim();
    let url = Url::parse(raw).map_err(|_| RequestError::InvalidUrl(raw.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(RequestError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}

/// Zip parallel key/value lists from the form, trimming both sides and
/// discarding pairs whose key is blank. A missing value becomes `""`.
pub fn pairs_from_form(keys: &[String], values: &[String]) -> Vec<(String, String)> {
    keys.iter()
        .enumerate()
        .filter_map(|(index, key)| {
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            let value = values.get(index).map(|v| v.trim()).unwrap_or("");
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Collapse repeated keys: the last value wins, the first position is kept.
pub fn unique_keys(pairs: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut unique: Vec<(String, String)> = Vec::with_capacity(pairs.len());
    for (key, value) in pairs {
        match unique.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => unique.push((key, value)),
        }
    }
    unique
}

fn is_json(body: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(body).is_ok()
}
