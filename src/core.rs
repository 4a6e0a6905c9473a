use crate::error::XaiError;
use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

/// Reads the API key from a plaintext file, trimming surrounding whitespace.
pub fn load_api_key(key_path: &Path) -> Result<String> {
    log::debug!("Reading API key: {}", key_path.display());
    match fs::read_to_string(key_path) {
        Ok(txt) => Ok(txt.trim().to_string()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(XaiError::KeyNotFound(key_path.to_path_buf()).into())
        }
        Err(err) => Err(err).with_context(|| format!("read API key {}", key_path.display())),
    }
}

/// Builds an HTTP client whose requests fail after `timeout`.
pub fn http_client(timeout: Duration) -> Result<Client> {
    let cli = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(XaiError::from)?;
    Ok(cli)
}

/// Posts a JSON body with bearer auth and returns the JSON response.
///
/// Object key order of the response is kept.
pub async fn post_json<T: Serialize>(
    cli: &Client,
    url: &str,
    api_key: &str,
    body: &T,
) -> Result<Value> {
    if log::log_enabled!(log::Level::Trace) {
        if let Ok(json) = serde_json::to_string(body) {
            log::trace!("request payload: {}", json);
        }
    }

    log::debug!("POST {url}");
    let res = cli
        .post(url)
        .bearer_auth(api_key)
        .json(body)
        .send()
        .await
        .map_err(XaiError::from)?;

    let status = res.status();
    log::debug!("HTTP status: {}", status);
    let bdy = res.text().await.map_err(XaiError::from)?;

    if !status.is_success() {
        return Err(XaiError::Http {
            status: status.as_u16(),
            body: bdy,
        }
        .into());
    }

    let val = serde_json::from_str(&bdy).map_err(|e| XaiError::Json(e.to_string()))?;
    Ok(val)
}
