use crate::{AlwaysConfirm, ChatSession, ConfirmGuard};
use std::sync::Arc;
use trinity_sdk::Gateway;

/// Parameters required to create a new chat session.
/// # Default Values
/// - `confirm`: [`AlwaysConfirm`]
/// - `include_context`: `true`
pub struct ChatSessionParams {
    /// The gateway used to reach the backend.
    pub gateway: Arc<dyn Gateway>,
    /// Guard consulted before destructive actions.
    pub confirm: Arc<dyn ConfirmGuard>,
    /// Whether sends ask the backend to include shared document context.
    pub include_context: bool,
}

impl ChatSessionParams {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            gateway,
            confirm: Arc::new(AlwaysConfirm),
            include_context: true,
        }
    }

    /// Set the confirmation guard
    #[must_use]
    pub fn confirm(mut self, confirm: Arc<dyn ConfirmGuard>) -> Self {
        self.confirm = confirm;
        self
    }

    /// Set whether sends include shared document context
    #[must_use]
    pub fn include_context(mut self, include_context: bool) -> Self {
        self.include_context = include_context;
        self
    }

    #[must_use]
    pub fn build(self) -> ChatSession {
        ChatSession::new(self)
    }
}
