use crate::{
    opentelemetry::{trace_submit, SubmitSummary},
    parse_wire_timestamp, AssistantEntry, ChatError, ChatSessionParams, ChatState, ConfirmGuard,
    ConfirmPrompt, Draft, Event, Notice, Origin, Severity, TranscriptEntry,
};
use chrono::Utc;
use std::sync::Arc;
use trinity_sdk::{ChatRequest, FileUpload, Gateway, HistoryEntryKind};

/// Drives one conversation against a Trinity backend.
///
/// The session owns a [`ChatState`] and advances it by applying [`Event`]s
/// around gateway calls. All fallible outcomes surface as transcript
/// entries, alerts, or traces; only [`ChatSession::hydrate`] and
/// [`ChatSession::attach_file`] return errors to the caller.
pub struct ChatSession {
    gateway: Arc<dyn Gateway>,
    confirm: Arc<dyn ConfirmGuard>,
    include_context: bool,
    state: ChatState,
    refresh_seq: u64,
}

impl ChatSession {
    #[must_use]
    pub fn new(params: ChatSessionParams) -> Self {
        Self {
            gateway: params.gateway,
            confirm: params.confirm,
            include_context: params.include_context,
            state: ChatState::new(),
            refresh_seq: 0,
        }
    }

    /// Resume from a previously captured state snapshot.
    #[must_use]
    pub fn with_state(params: ChatSessionParams, state: ChatState) -> Self {
        let mut session = Self::new(params);
        session.refresh_seq = state.documents_seq();
        session.state = state;
        session
    }

    pub fn builder(gateway: Arc<dyn Gateway>) -> ChatSessionParams {
        ChatSessionParams::new(gateway)
    }

    #[must_use]
    pub fn state(&self) -> &ChatState {
        &self.state
    }

    /// Replace the draft text under composition.
    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.state.apply(Event::DraftEdited { text: text.into() });
    }

    /// Stage a file for the next send. Files outside the accepted
    /// extension list are rejected before anything reaches the backend.
    pub fn attach_file(&mut self, file: FileUpload) -> Result<(), ChatError> {
        if !file.is_accepted() {
            return Err(ChatError::UnsupportedFile(file.file_name));
        }
        self.state.apply(Event::FileAttached { file });
        Ok(())
    }

    /// Remove the staged file without sending it.
    pub fn clear_attachment(&mut self) {
        self.state.apply(Event::AttachmentCleared);
    }

    /// Drain alerts queued for modal display.
    pub fn take_alerts(&mut self) -> Vec<Notice> {
        self.state.take_alerts()
    }

    /// Send the current draft: upload the staged file first if present,
    /// then commit the text and collect assistant replies.
    ///
    /// A busy session and an empty draft are both no-ops. A failed upload
    /// aborts the send; the text stays out of the transcript.
    pub async fn submit(&mut self) {
        if self.state.is_sending() {
            return;
        }
        let draft = self.state.draft().clone();
        if draft.is_empty() {
            return;
        }

        let has_attachment = draft.attachment.is_some();
        let has_text = !draft.text.trim().is_empty();
        trace_submit(has_attachment, has_text, self.drive_submit(draft)).await;
    }

    async fn drive_submit(&mut self, draft: Draft) -> SubmitSummary {
        let mut summary = SubmitSummary::default();
        self.state.apply(Event::SendStarted);

        if let Some(file) = draft.attachment {
            let file_name = file.file_name.clone();
            self.state.apply(Event::UploadStarted {
                file_name: file_name.clone(),
            });
            let uploaded = self.gateway.upload(file).await;
            self.state.apply(Event::UploadSettled);

            match uploaded {
                Ok(_) => {
                    summary.uploaded = true;
                    self.raise(Notice::transcript(
                        Severity::Info,
                        format!("File uploaded: {file_name}"),
                    ));
                }
                Err(error) => {
                    let detail = error.detail();
                    summary.failure = Some(detail.clone());
                    self.raise(Notice::transcript(
                        Severity::Error,
                        format!("File upload failed: {detail}"),
                    ));
                    self.state.apply(Event::SendSettled);
                    return summary;
                }
            }
        }

        let text = draft.text.trim().to_string();
        if text.is_empty() {
            self.state.apply(Event::SendSettled);
            return summary;
        }

        self.state.apply(Event::UserCommitted {
            text: text.clone(),
            at: Utc::now(),
        });

        let request = ChatRequest::new(text).with_include_context(self.include_context);
        match self.gateway.chat(request).await {
            Ok(response) => {
                let received_at = Utc::now();
                let entries: Vec<AssistantEntry> = response
                    .responses
                    .into_iter()
                    .map(|reply| AssistantEntry {
                        origin: Origin::from(reply.ai_name),
                        text: reply.response,
                        at: parse_wire_timestamp(&reply.timestamp).unwrap_or(received_at),
                    })
                    .collect();
                summary.replies = entries.len();
                self.state.apply(Event::RepliesReceived { entries });
            }
            Err(error) => {
                let detail = error.detail();
                summary.failure = Some(detail.clone());
                self.raise(Notice::transcript(
                    Severity::Error,
                    format!("Error: {detail}"),
                ));
            }
        }

        self.state.apply(Event::SendSettled);
        summary
    }

    /// Clear the server-side history and, on success, the local transcript.
    pub async fn clear_history(&mut self) {
        if !self.confirm.confirm(ConfirmPrompt::ClearHistory).await {
            return;
        }
        match self.gateway.clear_history().await {
            Ok(_) => self.state.apply(Event::HistoryCleared),
            Err(error) => {
                // The stale transcript stays visible; only traces record it.
                self.raise(Notice::log(
                    Severity::Error,
                    format!("Failed to clear history: {}", error.detail()),
                ));
            }
        }
    }

    /// Fetch the document listing and replace the cache wholesale.
    ///
    /// Each call takes a fresh sequence number, so a listing that arrives
    /// after a newer one has landed is discarded. On failure the cache
    /// keeps its last listing.
    pub async fn refresh_documents(&mut self) {
        self.refresh_seq += 1;
        let seq = self.refresh_seq;

        match self.gateway.list_documents().await {
            Ok(list) if list.success => {
                self.state.apply(Event::DocumentsLoaded {
                    seq,
                    documents: list.documents,
                });
            }
            Ok(list) => {
                let reason = list.error.unwrap_or_else(|| "unknown error".to_string());
                self.raise(Notice::log(
                    Severity::Warning,
                    format!("Failed to load documents: {reason}"),
                ));
            }
            Err(error) => {
                self.raise(Notice::log(
                    Severity::Warning,
                    format!("Failed to load documents: {}", error.detail()),
                ));
            }
        }
    }

    /// Delete one document, announce the outcome, and refresh the cache.
    ///
    /// Any delivered response counts as done from the client's point of
    /// view; only a transport failure raises an alert instead.
    pub async fn delete_document(&mut self, document_id: &str) {
        if !self.confirm.confirm(ConfirmPrompt::DeleteDocument).await {
            return;
        }
        match self.gateway.delete_document(document_id).await {
            Ok(_) => {
                self.raise(Notice::transcript(Severity::Info, "Document deleted"));
                self.refresh_documents().await;
            }
            Err(error) => {
                self.raise(Notice::alert(
                    Severity::Error,
                    format!("Failed to delete document: {}", error.detail()),
                ));
            }
        }
    }

    /// Delete every document, announce the server's receipt, and refresh.
    pub async fn clear_documents(&mut self) {
        if !self
            .confirm
            .confirm(ConfirmPrompt::DeleteAllDocuments)
            .await
        {
            return;
        }
        match self.gateway.clear_documents().await {
            Ok(receipt) => {
                let text = receipt
                    .message
                    .unwrap_or_else(|| "All documents deleted".to_string());
                self.raise(Notice::transcript(Severity::Info, text));
                self.refresh_documents().await;
            }
            Err(error) => {
                self.raise(Notice::alert(
                    Severity::Error,
                    format!("Failed to delete documents: {}", error.detail()),
                ));
            }
        }
    }

    /// Replace the transcript with the server-side history snapshot.
    pub async fn hydrate(&mut self) -> Result<(), ChatError> {
        let snapshot = self.gateway.history().await?;
        let received_at = Utc::now();
        let entries = snapshot
            .history
            .into_iter()
            .map(|entry| {
                let at = parse_wire_timestamp(&entry.timestamp).unwrap_or(received_at);
                match entry.kind {
                    HistoryEntryKind::User => TranscriptEntry::user(entry.message, at),
                    HistoryEntryKind::Ai => TranscriptEntry::assistant(
                        Origin::from(entry.ai_name.unwrap_or_else(|| "AI".to_string())),
                        entry.message,
                        at,
                    ),
                    HistoryEntryKind::System => TranscriptEntry::system(entry.message, at),
                }
            })
            .collect();
        self.state.apply(Event::Hydrated { entries });
        Ok(())
    }

    fn raise(&mut self, notice: Notice) {
        match notice.severity {
            Severity::Info => tracing::info!(channel = ?notice.channel, "{}", notice.text),
            Severity::Warning => tracing::warn!(channel = ?notice.channel, "{}", notice.text),
            Severity::Error => tracing::error!(channel = ?notice.channel, "{}", notice.text),
        }
        self.state.apply(Event::Noticed {
            notice,
            at: Utc::now(),
        });
    }
}
