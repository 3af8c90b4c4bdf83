use std::{
    pin::Pin,
    task::{Context, Poll},
};

use crate::{
    ChatRequest, ChatResponse, ChatStreamEvent, ClearDocumentsReceipt, ClearHistoryReceipt,
    DeleteReceipt, DocumentList, FileUpload, GatewayResult, HealthStatus, HistorySnapshot,
    UploadReceipt,
};
use futures::Stream;

/// Client-side contract for the Trinity backend. One method per REST
/// endpoint; implementations must not retry on failure.
#[async_trait::async_trait]
pub trait Gateway: Send + Sync {
    /// Upload a document for indexing into the backend's file store.
    async fn upload(&self, file: FileUpload) -> GatewayResult<UploadReceipt>;
    /// Send a chat message and collect every assistant's reply.
    async fn chat(&self, request: ChatRequest) -> GatewayResult<ChatResponse>;
    /// Send a chat message and receive replies as a stream of events.
    async fn chat_stream(&self, request: ChatRequest) -> GatewayResult<ChatEventStream>;
    /// Fetch the persisted conversation history.
    async fn history(&self) -> GatewayResult<HistorySnapshot>;
    /// Wipe the persisted conversation history.
    async fn clear_history(&self) -> GatewayResult<ClearHistoryReceipt>;
    /// List the uploaded documents.
    async fn list_documents(&self) -> GatewayResult<DocumentList>;
    /// Delete one document by its id.
    async fn delete_document(&self, document_id: &str) -> GatewayResult<DeleteReceipt>;
    /// Delete every uploaded document.
    async fn clear_documents(&self) -> GatewayResult<ClearDocumentsReceipt>;
    /// Probe backend liveness and assistant availability.
    async fn health(&self) -> GatewayResult<HealthStatus>;
}

pub struct ChatEventStream(Pin<Box<dyn Stream<Item = GatewayResult<ChatStreamEvent>> + Send>>);

impl ChatEventStream {
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = GatewayResult<ChatStreamEvent>> + Send + 'static,
    {
        Self(Box::pin(stream))
    }
}

impl std::fmt::Debug for ChatEventStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatEventStream").finish_non_exhaustive()
    }
}

impl Stream for ChatEventStream {
    type Item = GatewayResult<ChatStreamEvent>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.0.as_mut().poll_next(cx)
    }
}
