use crate::{AssistantEntry, Notice, TranscriptEntry};
use chrono::{DateTime, Utc};
use trinity_sdk::{DocumentMetadata, FileUpload};

/// State transition input for [`ChatState::apply`](crate::ChatState::apply).
///
/// Transitions are pure: anything time- or IO-dependent (timestamps, fetched
/// documents, reply batches) is captured in the event itself, so replaying
/// the same events always rebuilds the same state.
#[derive(Debug, Clone)]
pub enum Event {
    /// The draft text changed.
    DraftEdited { text: String },
    /// A file was staged for the next send.
    FileAttached { file: FileUpload },
    /// The staged file was removed without sending.
    AttachmentCleared,
    /// A send began: the draft is consumed and the session goes busy.
    SendStarted,
    /// The staged file started uploading.
    UploadStarted { file_name: String },
    /// The upload finished, successfully or not.
    UploadSettled,
    /// The user's text was accepted into the transcript.
    UserCommitted { text: String, at: DateTime<Utc> },
    /// Assistant replies arrived for the committed text.
    RepliesReceived { entries: Vec<AssistantEntry> },
    /// The send finished, successfully or not. The session goes idle.
    SendSettled,
    /// The server confirmed the history was cleared.
    HistoryCleared,
    /// A server-side history snapshot replaced the transcript.
    Hydrated { entries: Vec<TranscriptEntry> },
    /// A document listing arrived. Stale listings (older `seq`) are ignored.
    DocumentsLoaded {
        seq: u64,
        documents: Vec<DocumentMetadata>,
    },
    /// An outcome notice was raised and routed to its channel.
    Noticed { notice: Notice, at: DateTime<Utc> },
}
