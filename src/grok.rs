//! Grok chat completions with the `x_search` tool enabled.

use crate::core::*;
use crate::models::*;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;

pub const KEY_PTH: &str = "/workspace/group/secrets/xai_api_key.txt";
pub const URL: &str = "https://api.x.ai/v1/chat/completions";
pub const MODEL: &str = "grok-beta";
pub const HOURS_BACK: i64 = 24;
const TIMEOUT_SECS: u64 = 90;
const SYSTEM: &str = "You are a helpful AI assistant with access to real-time X (Twitter) search. When searching X, focus on the most significant and notable content.";

/// Client settings for one search call.
#[derive(Debug, Clone)]
pub struct Grok {
    pub key_path: PathBuf,
    pub url: String,
    pub timeout: Duration,
    pub system: String,
}

impl Default for Grok {
    fn default() -> Self {
        Self {
            key_path: PathBuf::from(KEY_PTH),
            url: URL.into(),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            system: SYSTEM.into(),
        }
    }
}

impl Grok {
    /// Sends `prompt` to Grok with X search limited to the last `hours_back` hours.
    ///
    /// The API key is read before any network access.
    pub async fn call_grok_with_x_search(
        &self,
        prompt: &str,
        hours_back: i64,
        model: &str,
    ) -> Result<Value> {
        let api_key = load_api_key(&self.key_path)?;
        let req = build_request(&self.system, prompt, hours_back, model, Utc::now())?;
        let cli = http_client(self.timeout)?;
        post_json(&cli, &self.url, &api_key, &req).await
    }
}

/// Builds the request body for a search ending at `now`.
pub fn build_request(
    system: &str,
    prompt: &str,
    hours_back: i64,
    model: &str,
    now: DateTime<Utc>,
) -> Result<ChatRequest> {
    let window = DateWindow::ending_at(now, hours_back)?;
    if hours_back <= 0 {
        let knd = if window.is_inverted() { "inverted" } else { "zero-width" };
        log::warn!("hours_back {hours_back} gives a {knd} window {window}");
    }
    log::debug!("search window {window}");

    Ok(ChatRequest {
        model: model.into(),
        messages: vec![
            Message {
                role: Role::System,
                content: system.into(),
            },
            Message {
                role: Role::User,
                content: prompt.into(),
            },
        ],
        tools: vec![Tool::XSearch {
            x_search: XSearch {
                window,
                enable_image_understanding: true,
            },
        }],
        tool_choice: ToolChoice::Auto,
    })
}
