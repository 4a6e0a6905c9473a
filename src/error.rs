use std::fmt;
use std::path::PathBuf;

/// Failures of a single search call.
#[derive(Debug)]
pub enum XaiError {
    /// The API key file does not exist.
    KeyNotFound(PathBuf),
    /// The API answered with a non-success status.
    Http { status: u16, body: String },
    /// DNS, connect, TLS, timeout or body read failure.
    Transport(String),
    /// A success response whose body is not JSON.
    Json(String),
    /// `hours_back` moves the window start off the calendar.
    InvalidWindow(i64),
}

impl fmt::Display for XaiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XaiError::KeyNotFound(pth) => write!(f, "API key not found at {}", pth.display()),
            XaiError::Http { status, body } => write!(f, "HTTP Error {}: {}", status, body),
            XaiError::Transport(reason) => write!(f, "URL Error: {}", reason),
            XaiError::Json(e) => write!(f, "JSON Parse Error: {}", e),
            XaiError::InvalidWindow(hrs) => write!(f, "hours_back out of range: {}", hrs),
        }
    }
}

impl std::error::Error for XaiError {}

/// Converts reqwest errors into transport errors, keeping the cause chain.
impl From<reqwest::Error> for XaiError {
    fn from(err: reqwest::Error) -> Self {
        let mut reason = err.to_string();
        let mut src = std::error::Error::source(&err);
        while let Some(cause) = src {
            reason.push_str(": ");
            reason.push_str(&cause.to_string());
            src = cause.source();
        }
        XaiError::Transport(reason)
    }
}
