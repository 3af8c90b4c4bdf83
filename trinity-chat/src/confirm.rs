/// Destructive action awaiting user confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmPrompt {
    ClearHistory,
    DeleteDocument,
    DeleteAllDocuments,
}

impl ConfirmPrompt {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::ClearHistory => "Delete all chat history?",
            Self::DeleteDocument => "Delete this document?",
            Self::DeleteAllDocuments => "Delete all documents? This cannot be undone.",
        }
    }

    #[must_use]
    pub fn irreversible(self) -> bool {
        matches!(self, Self::DeleteAllDocuments)
    }
}

/// Asks the user before a destructive action runs. A declined prompt
/// cancels the action with no state change.
#[async_trait::async_trait]
pub trait ConfirmGuard: Send + Sync {
    async fn confirm(&self, prompt: ConfirmPrompt) -> bool;
}

/// Guard that approves every prompt, for headless and scripted use.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

#[async_trait::async_trait]
impl ConfirmGuard for AlwaysConfirm {
    async fn confirm(&self, _prompt: ConfirmPrompt) -> bool {
        true
    }
}
