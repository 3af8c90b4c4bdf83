use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use trinity_sdk::FileUpload;

/// Which assistant a reply came from.
///
/// The backend routes one message to several assistants and names each one
/// in its reply. Unrecognized names are kept verbatim in [`Origin::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Origin {
    Gpt,
    Claude,
    Gemini,
    Other(String),
}

impl Origin {
    pub const KNOWN: [Self; 3] = [Self::Gpt, Self::Claude, Self::Gemini];

    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Gpt => "GPT",
            Self::Claude => "Claude",
            Self::Gemini => "Gemini",
            Self::Other(name) => name,
        }
    }

    /// Accent color used when rendering this assistant's replies.
    #[must_use]
    pub fn accent_color(&self) -> &'static str {
        match self {
            Self::Gpt => "#10a37f",
            Self::Claude => "#cc785c",
            Self::Gemini => "#4285f4",
            Self::Other(_) => "#666",
        }
    }
}

impl From<String> for Origin {
    fn from(name: String) -> Self {
        match name.as_str() {
            "GPT" => Self::Gpt,
            "Claude" => Self::Claude,
            "Gemini" => Self::Gemini,
            _ => Self::Other(name),
        }
    }
}

impl From<&str> for Origin {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<Origin> for String {
    fn from(origin: Origin) -> Self {
        origin.display_name().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEntry {
    pub text: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantEntry {
    pub origin: Origin,
    pub text: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemEntry {
    pub text: String,
    pub at: DateTime<Utc>,
}

/// One line of the transcript. Entries are immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TranscriptEntry {
    User(UserEntry),
    Assistant(AssistantEntry),
    System(SystemEntry),
}

impl TranscriptEntry {
    pub fn user(text: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self::User(UserEntry {
            text: text.into(),
            at,
        })
    }

    pub fn assistant(origin: Origin, text: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self::Assistant(AssistantEntry {
            origin,
            text: text.into(),
            at,
        })
    }

    pub fn system(text: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self::System(SystemEntry {
            text: text.into(),
            at,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::User(entry) => &entry.text,
            Self::Assistant(entry) => &entry.text,
            Self::System(entry) => &entry.text,
        }
    }

    #[must_use]
    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::User(entry) => entry.at,
            Self::Assistant(entry) => entry.at,
            Self::System(entry) => entry.at,
        }
    }
}

impl From<UserEntry> for TranscriptEntry {
    fn from(entry: UserEntry) -> Self {
        Self::User(entry)
    }
}

impl From<AssistantEntry> for TranscriptEntry {
    fn from(entry: AssistantEntry) -> Self {
        Self::Assistant(entry)
    }
}

impl From<SystemEntry> for TranscriptEntry {
    fn from(entry: SystemEntry) -> Self {
        Self::System(entry)
    }
}

/// Message being composed: free text plus an optional file attachment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub text: String,
    pub attachment: Option<FileUpload>,
}

impl Draft {
    /// A draft with neither visible text nor an attachment sends nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.attachment.is_none()
    }
}

/// Parse a backend timestamp, accepting RFC 3339 and naive ISO 8601 forms.
#[must_use]
pub fn parse_wire_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
