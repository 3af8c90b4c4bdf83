use crate::{Channel, Draft, Event, Notice, TranscriptEntry};
use std::mem;
use trinity_sdk::DocumentMetadata;

/// Everything a chat view renders: the transcript, the draft under
/// composition, busy flags, pending alerts, and the document cache.
///
/// State only changes through [`ChatState::apply`]. [`ChatSession`]
/// (crate::ChatSession) produces the events; tests can drive `apply`
/// directly.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    transcript: Vec<TranscriptEntry>,
    draft: Draft,
    sending: bool,
    upload_in_progress: Option<String>,
    alerts: Vec<Notice>,
    documents: Vec<DocumentMetadata>,
    documents_seq: u64,
}

impl ChatState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// True from [`Event::SendStarted`] until [`Event::SendSettled`].
    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Name of the file currently uploading, if any.
    #[must_use]
    pub fn upload_in_progress(&self) -> Option<&str> {
        self.upload_in_progress.as_deref()
    }

    #[must_use]
    pub fn alerts(&self) -> &[Notice] {
        &self.alerts
    }

    /// Drain pending alerts for display.
    pub fn take_alerts(&mut self) -> Vec<Notice> {
        mem::take(&mut self.alerts)
    }

    #[must_use]
    pub fn documents(&self) -> &[DocumentMetadata] {
        &self.documents
    }

    /// Sequence number of the listing currently in the cache.
    #[must_use]
    pub fn documents_seq(&self) -> u64 {
        self.documents_seq
    }

    pub fn apply(&mut self, event: Event) {
        match event {
            Event::DraftEdited { text } => {
                self.draft.text = text;
            }
            Event::FileAttached { file } => {
                self.draft.attachment = Some(file);
            }
            Event::AttachmentCleared => {
                self.draft.attachment = None;
            }
            Event::SendStarted => {
                self.draft = Draft::default();
                self.sending = true;
            }
            Event::UploadStarted { file_name } => {
                self.upload_in_progress = Some(file_name);
            }
            Event::UploadSettled => {
                self.upload_in_progress = None;
            }
            Event::UserCommitted { text, at } => {
                self.transcript.push(TranscriptEntry::user(text, at));
            }
            Event::RepliesReceived { entries } => {
                self.transcript
                    .extend(entries.into_iter().map(TranscriptEntry::Assistant));
            }
            Event::SendSettled => {
                self.sending = false;
            }
            Event::HistoryCleared => {
                self.transcript.clear();
            }
            Event::Hydrated { entries } => {
                self.transcript = entries;
            }
            Event::DocumentsLoaded { seq, documents } => {
                // A slow response must not clobber a newer listing.
                if seq > self.documents_seq {
                    self.documents = documents;
                    self.documents_seq = seq;
                }
            }
            Event::Noticed { notice, at } => match notice.channel {
                Channel::Transcript => {
                    self.transcript.push(TranscriptEntry::system(notice.text, at));
                }
                Channel::Alert => {
                    self.alerts.push(notice);
                }
                Channel::Log => {}
            },
        }
    }
}
