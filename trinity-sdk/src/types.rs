use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Upload file extensions accepted client-side. The backend applies its own
/// validation on top of this.
pub const ACCEPTED_EXTENSIONS: [&str; 7] = ["pdf", "docx", "txt", "json", "png", "jpg", "jpeg"];

/// A file selected by the user, pending upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Body of a chat request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ChatRequest {
    pub message: String,
    /// Whether the backend should include prior turns as conversational
    /// context.
    #[serde(default = "default_include_context")]
    pub include_context: bool,
}

fn default_include_context() -> bool {
    true
}

/// One assistant's reply inside a chat response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct AssistantReply {
    pub ai_name: String,
    pub response: String,
    /// Timestamp as emitted by the backend. May be a naive ISO 8601 string
    /// without an offset.
    pub timestamp: String,
    /// Whether document context was available when the reply was produced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_context: Option<bool>,
}

/// Body of a chat response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ChatResponse {
    #[serde(default)]
    pub success: bool,
    /// The message after mention parsing, as the backend understood it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_message: Option<String>,
    /// Assistants addressed by `@name` mentions in the message, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mentioned_ais: Vec<String>,
    #[serde(default)]
    pub responses: Vec<AssistantReply>,
}

/// One event of a streamed chat response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChatStreamEvent {
    /// An assistant began its reply.
    Start { ai_name: String },
    /// A piece of an assistant's reply text.
    Chunk { ai_name: String, text: String },
    /// An assistant finished its reply.
    Done { ai_name: String },
    /// The backend reported a failure mid-stream.
    Error { message: String },
}

/// Body of an upload response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct UploadReceipt {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub filename: String,
    pub file_size: u64,
    /// Document id assigned by the backend's file store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Metadata for one uploaded document. The `name` field is the document id
/// used in delete paths.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct DocumentMetadata {
    pub name: String,
    pub display_name: String,
    pub uri: String,
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Upload time in epoch seconds.
    pub upload_time: f64,
}

/// Body of a document-list response. The backend answers HTTP 200 even for
/// logical failures and signals them through `success`/`error`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct DocumentList {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    #[serde(default)]
    pub documents: Vec<DocumentMetadata>,
    #[serde(default)]
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of a delete-one-document response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct DeleteReceipt {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of a delete-all-documents response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ClearDocumentsReceipt {
    #[serde(default)]
    pub success: bool,
    /// Backend-provided summary, e.g. how many documents were removed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of a clear-history response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ClearHistoryReceipt {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Kind of a persisted history entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum HistoryEntryKind {
    User,
    Ai,
    System,
}

/// One persisted history entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct HistoryEntry {
    #[serde(rename = "type")]
    pub kind: HistoryEntryKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_name: Option<String>,
    pub timestamp: String,
    /// Upload echo attached to system entries that record a file upload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_info: Option<Value>,
}

/// Body of a history response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct HistorySnapshot {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub count: usize,
}

/// Body of a health-probe response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub available_ais: Vec<String>,
    #[serde(default)]
    pub uploaded_files_count: usize,
    #[serde(default)]
    pub chat_history_count: usize,
}
