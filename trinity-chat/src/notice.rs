use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Where a notice surfaces in the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Appended to the transcript as a system entry.
    Transcript,
    /// Queued for a modal alert.
    Alert,
    /// Traced only, never shown.
    Log,
}

/// Outcome report for an operation, routed to exactly one channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub severity: Severity,
    pub channel: Channel,
    pub text: String,
}

impl Notice {
    pub fn transcript(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            channel: Channel::Transcript,
            text: text.into(),
        }
    }

    pub fn alert(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            channel: Channel::Alert,
            text: text.into(),
        }
    }

    pub fn log(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            channel: Channel::Log,
            text: text.into(),
        }
    }
}
