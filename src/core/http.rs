//! HTTP utilities for Clash of Clans API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

/// Build the bearer-token headers every API request carries.
pub fn auth_header_map(api_token: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_token.trim()))?;
    bearer.set_sensitive(true);
    h.insert(AUTHORIZATION, bearer);
    Ok(h)
}
