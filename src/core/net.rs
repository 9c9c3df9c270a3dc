// src/core/net.rs

// Blocking HTTP GET (one request, no retries)

use std::time::Duration;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::ScrapeError;

pub fn http_get(url: &str) -> Result<String, ScrapeError> {
    let http = |source| ScrapeError::Http { url: s!(url), source };

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .map_err(http)?;

    let resp = client.get(url).send().map_err(http)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::Status { status: status.as_u16(), url: s!(url) });
    }

    let body = resp.text().map_err(http)?;
    logd!("Net: GET {} -> {} ({} bytes)", url, status.as_u16(), body.len());
    Ok(body)
}
