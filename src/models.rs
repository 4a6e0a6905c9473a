use crate::error::XaiError;
use anyhow::Result;
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A role-tagged chat message.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// Calendar dates bounding an X search.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

impl DateWindow {
    /// Window from `now - hours_back` hours to `now`, truncated to UTC dates.
    ///
    /// Zero or negative hours are kept as given and yield a zero-width or
    /// inverted window.
    pub fn ending_at(now: DateTime<Utc>, hours_back: i64) -> Result<DateWindow> {
        let start = TimeDelta::try_hours(hours_back)
            .and_then(|dlt| now.checked_sub_signed(dlt))
            .ok_or(XaiError::InvalidWindow(hours_back))?;
        Ok(DateWindow {
            from_date: start.date_naive(),
            to_date: now.date_naive(),
        })
    }

    pub fn is_inverted(&self) -> bool {
        self.from_date > self.to_date
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}..{}", self.from_date, self.to_date)
    }
}

/// Settings of the `x_search` tool.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct XSearch {
    #[serde(flatten)]
    pub window: DateWindow,
    pub enable_image_understanding: bool,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Tool {
    XSearch { x_search: XSearch },
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToolChoice {
    Auto,
}

/// Body of a chat completions request.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub tools: Vec<Tool>,
    pub tool_choice: ToolChoice,
}
