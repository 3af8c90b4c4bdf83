use std::{collections::VecDeque, sync::Mutex};

use futures::stream;

use crate::{
    errors::{GatewayError, GatewayResult},
    gateway::{ChatEventStream, Gateway},
    ChatRequest, ChatResponse, ChatStreamEvent, ClearDocumentsReceipt, ClearHistoryReceipt,
    DeleteReceipt, DocumentList, FileUpload, HealthStatus, HistorySnapshot, UploadReceipt,
};

/// Result for a mocked call.
/// It can either be a value to yield or an error to return.
pub enum MockResult<T> {
    Value(T),
    Error(GatewayError),
}

impl<T> MockResult<T> {
    /// Construct a result that yields the provided value.
    pub fn value(value: T) -> Self {
        Self::Value(value)
    }

    /// Construct a result that yields the provided error.
    pub fn error(error: GatewayError) -> Self {
        Self::Error(error)
    }

    fn resolve(self) -> GatewayResult<T> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Error(error) => Err(error),
        }
    }
}

impl<T> From<T> for MockResult<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// Result for a mocked `chat_stream` call.
/// It can either be a set of events or an error to return.
pub enum MockStreamResult {
    Events(Vec<ChatStreamEvent>),
    Error(GatewayError),
}

impl MockStreamResult {
    /// Construct a result that yields the provided events.
    pub fn events(events: Vec<ChatStreamEvent>) -> Self {
        Self::Events(events)
    }

    /// Construct a result that yields the provided error.
    pub fn error(error: GatewayError) -> Self {
        Self::Error(error)
    }
}

impl From<Vec<ChatStreamEvent>> for MockStreamResult {
    fn from(events: Vec<ChatStreamEvent>) -> Self {
        Self::events(events)
    }
}

impl From<ChatStreamEvent> for MockStreamResult {
    fn from(event: ChatStreamEvent) -> Self {
        Self::events(vec![event])
    }
}

#[derive(Default)]
struct MockGatewayState {
    mocked_upload_results: VecDeque<MockResult<UploadReceipt>>,
    mocked_chat_results: VecDeque<MockResult<ChatResponse>>,
    mocked_chat_stream_results: VecDeque<MockStreamResult>,
    mocked_history_results: VecDeque<MockResult<HistorySnapshot>>,
    mocked_clear_history_results: VecDeque<MockResult<ClearHistoryReceipt>>,
    mocked_list_documents_results: VecDeque<MockResult<DocumentList>>,
    mocked_delete_document_results: VecDeque<MockResult<DeleteReceipt>>,
    mocked_clear_documents_results: VecDeque<MockResult<ClearDocumentsReceipt>>,
    mocked_health_results: VecDeque<MockResult<HealthStatus>>,
    tracked_uploads: Vec<FileUpload>,
    tracked_chat_requests: Vec<ChatRequest>,
    tracked_chat_stream_requests: Vec<ChatRequest>,
    tracked_delete_document_ids: Vec<String>,
    history_calls: usize,
    clear_history_calls: usize,
    list_documents_calls: usize,
    clear_documents_calls: usize,
    health_calls: usize,
}

impl MockGatewayState {
    fn reset(&mut self) {
        self.tracked_uploads.clear();
        self.tracked_chat_requests.clear();
        self.tracked_chat_stream_requests.clear();
        self.tracked_delete_document_ids.clear();
        self.history_calls = 0;
        self.clear_history_calls = 0;
        self.list_documents_calls = 0;
        self.clear_documents_calls = 0;
        self.health_calls = 0;
    }

    fn restore(&mut self) {
        self.mocked_upload_results.clear();
        self.mocked_chat_results.clear();
        self.mocked_chat_stream_results.clear();
        self.mocked_history_results.clear();
        self.mocked_clear_history_results.clear();
        self.mocked_list_documents_results.clear();
        self.mocked_delete_document_results.clear();
        self.mocked_clear_documents_results.clear();
        self.mocked_health_results.clear();
        self.reset();
    }
}

/// A mock gateway for testing that tracks inputs and yields predefined
/// outputs.
#[derive(Default)]
pub struct MockGateway {
    state: Mutex<MockGatewayState>,
}

impl MockGateway {
    /// Construct a new mock gateway instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a mocked upload result.
    pub fn enqueue_upload<R>(&self, result: R) -> &Self
    where
        R: Into<MockResult<UploadReceipt>>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_upload_results.push_back(result.into());
        drop(state);
        self
    }

    /// Enqueue a mocked chat result.
    pub fn enqueue_chat<R>(&self, result: R) -> &Self
    where
        R: Into<MockResult<ChatResponse>>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_chat_results.push_back(result.into());
        drop(state);
        self
    }

    /// Enqueue a mocked chat stream result.
    pub fn enqueue_chat_stream<R>(&self, result: R) -> &Self
    where
        R: Into<MockStreamResult>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_chat_stream_results.push_back(result.into());
        drop(state);
        self
    }

    /// Enqueue a mocked history result.
    pub fn enqueue_history<R>(&self, result: R) -> &Self
    where
        R: Into<MockResult<HistorySnapshot>>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_history_results.push_back(result.into());
        drop(state);
        self
    }

    /// Enqueue a mocked clear-history result.
    pub fn enqueue_clear_history<R>(&self, result: R) -> &Self
    where
        R: Into<MockResult<ClearHistoryReceipt>>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_clear_history_results.push_back(result.into());
        drop(state);
        self
    }

    /// Enqueue a mocked document-list result.
    pub fn enqueue_documents<R>(&self, result: R) -> &Self
    where
        R: Into<MockResult<DocumentList>>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_list_documents_results.push_back(result.into());
        drop(state);
        self
    }

    /// Enqueue a mocked delete-document result.
    pub fn enqueue_delete_document<R>(&self, result: R) -> &Self
    where
        R: Into<MockResult<DeleteReceipt>>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_delete_document_results.push_back(result.into());
        drop(state);
        self
    }

    /// Enqueue a mocked clear-documents result.
    pub fn enqueue_clear_documents<R>(&self, result: R) -> &Self
    where
        R: Into<MockResult<ClearDocumentsReceipt>>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_clear_documents_results.push_back(result.into());
        drop(state);
        self
    }

    /// Enqueue a mocked health result.
    pub fn enqueue_health<R>(&self, result: R) -> &Self
    where
        R: Into<MockResult<HealthStatus>>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_health_results.push_back(result.into());
        drop(state);
        self
    }

    /// Retrieve the tracked uploads accumulated so far.
    pub fn tracked_uploads(&self) -> Vec<FileUpload> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_uploads.clone()
    }

    /// Retrieve the tracked chat requests accumulated so far.
    pub fn tracked_chat_requests(&self) -> Vec<ChatRequest> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_chat_requests.clone()
    }

    /// Retrieve the tracked chat stream requests accumulated so far.
    pub fn tracked_chat_stream_requests(&self) -> Vec<ChatRequest> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_chat_stream_requests.clone()
    }

    /// Retrieve the tracked delete-document ids accumulated so far.
    pub fn tracked_delete_document_ids(&self) -> Vec<String> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_delete_document_ids.clone()
    }

    /// Number of history calls received so far.
    pub fn history_calls(&self) -> usize {
        let state = self.state.lock().expect("mock state poisoned");
        state.history_calls
    }

    /// Number of clear-history calls received so far.
    pub fn clear_history_calls(&self) -> usize {
        let state = self.state.lock().expect("mock state poisoned");
        state.clear_history_calls
    }

    /// Number of document-list calls received so far.
    pub fn list_documents_calls(&self) -> usize {
        let state = self.state.lock().expect("mock state poisoned");
        state.list_documents_calls
    }

    /// Number of clear-documents calls received so far.
    pub fn clear_documents_calls(&self) -> usize {
        let state = self.state.lock().expect("mock state poisoned");
        state.clear_documents_calls
    }

    /// Number of health calls received so far.
    pub fn health_calls(&self) -> usize {
        let state = self.state.lock().expect("mock state poisoned");
        state.health_calls
    }

    /// Reset tracked inputs without touching enqueued results.
    pub fn reset(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.reset();
    }

    /// Clear both tracked inputs and enqueued results.
    pub fn restore(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.restore();
    }
}

#[async_trait::async_trait]
impl Gateway for MockGateway {
    async fn upload(&self, file: FileUpload) -> GatewayResult<UploadReceipt> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_uploads.push(file);

        state
            .mocked_upload_results
            .pop_front()
            .ok_or_else(|| GatewayError::Invariant("no mocked upload results available".into()))?
            .resolve()
    }

    async fn chat(&self, request: ChatRequest) -> GatewayResult<ChatResponse> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_chat_requests.push(request);

        state
            .mocked_chat_results
            .pop_front()
            .ok_or_else(|| GatewayError::Invariant("no mocked chat results available".into()))?
            .resolve()
    }

    async fn chat_stream(&self, request: ChatRequest) -> GatewayResult<ChatEventStream> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_chat_stream_requests.push(request);

        let result = state.mocked_chat_stream_results.pop_front().ok_or_else(|| {
            GatewayError::Invariant("no mocked chat stream results available".into())
        })?;

        match result {
            MockStreamResult::Error(error) => Err(error),
            MockStreamResult::Events(events) => Ok(stream_from_events(events)),
        }
    }

    async fn history(&self) -> GatewayResult<HistorySnapshot> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.history_calls += 1;

        state
            .mocked_history_results
            .pop_front()
            .ok_or_else(|| GatewayError::Invariant("no mocked history results available".into()))?
            .resolve()
    }

    async fn clear_history(&self) -> GatewayResult<ClearHistoryReceipt> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.clear_history_calls += 1;

        state
            .mocked_clear_history_results
            .pop_front()
            .ok_or_else(|| {
                GatewayError::Invariant("no mocked clear history results available".into())
            })?
            .resolve()
    }

    async fn list_documents(&self) -> GatewayResult<DocumentList> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.list_documents_calls += 1;

        state
            .mocked_list_documents_results
            .pop_front()
            .ok_or_else(|| {
                GatewayError::Invariant("no mocked list documents results available".into())
            })?
            .resolve()
    }

    async fn delete_document(&self, document_id: &str) -> GatewayResult<DeleteReceipt> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state
            .tracked_delete_document_ids
            .push(document_id.to_string());

        state
            .mocked_delete_document_results
            .pop_front()
            .ok_or_else(|| {
                GatewayError::Invariant("no mocked delete document results available".into())
            })?
            .resolve()
    }

    async fn clear_documents(&self) -> GatewayResult<ClearDocumentsReceipt> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.clear_documents_calls += 1;

        state
            .mocked_clear_documents_results
            .pop_front()
            .ok_or_else(|| {
                GatewayError::Invariant("no mocked clear documents results available".into())
            })?
            .resolve()
    }

    async fn health(&self) -> GatewayResult<HealthStatus> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.health_calls += 1;

        state
            .mocked_health_results
            .pop_front()
            .ok_or_else(|| GatewayError::Invariant("no mocked health results available".into()))?
            .resolve()
    }
}

fn stream_from_events(events: Vec<ChatStreamEvent>) -> ChatEventStream {
    let iter = stream::iter(events.into_iter().map(Ok));
    ChatEventStream::from_stream(iter)
}
