use crate::{
    client_utils, ChatEventStream, ChatRequest, ChatResponse, ChatStreamEvent,
    ClearDocumentsReceipt, ClearHistoryReceipt, DeleteReceipt, DocumentList, FileUpload, Gateway,
    GatewayError, GatewayResult, HealthStatus, HistorySnapshot, UploadReceipt,
};
use async_stream::try_stream;
use futures::StreamExt;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    multipart::{Form, Part},
    Client,
};
use std::collections::HashMap;

/// [`Gateway`] implementation speaking to a Trinity backend over HTTP.
pub struct HttpGateway {
    base_url: String,
    client: Client,
    headers: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct HttpGatewayOptions {
    /// Base URL of the backend. Defaults to the local development server.
    pub base_url: Option<String>,
    /// Extra headers attached to every request.
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

impl HttpGateway {
    #[must_use]
    pub fn new(options: HttpGatewayOptions) -> Self {
        let HttpGatewayOptions {
            base_url,
            headers,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| "http://localhost:8000".to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_else(Client::new);
        let headers = headers.unwrap_or_default();

        Self {
            base_url,
            client,
            headers,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_headers(&self) -> GatewayResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        for (key, value) in &self.headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|error| {
                GatewayError::InvalidInput(format!("Invalid header name '{key}': {error}"))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|error| {
                GatewayError::InvalidInput(format!("Invalid header value for '{key}': {error}"))
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

impl Default for HttpGateway {
    fn default() -> Self {
        Self::new(HttpGatewayOptions::default())
    }
}

#[async_trait::async_trait]
impl Gateway for HttpGateway {
    async fn upload(&self, file: FileUpload) -> GatewayResult<UploadReceipt> {
        crate::opentelemetry::trace_request("upload", "POST", "/api/upload", || async move {
            let headers = self.request_headers()?;

            let FileUpload { file_name, bytes } = file;
            let part = Part::bytes(bytes).file_name(file_name);
            let form = Form::new().part("file", part);

            client_utils::post_multipart(
                &self.client,
                &format!("{}/api/upload", self.base_url),
                form,
                headers,
            )
            .await
        })
        .await
    }

    async fn chat(&self, request: ChatRequest) -> GatewayResult<ChatResponse> {
        crate::opentelemetry::trace_request("chat", "POST", "/api/chat", || async move {
            let headers = self.request_headers()?;

            client_utils::post_json(
                &self.client,
                &format!("{}/api/chat", self.base_url),
                &request,
                headers,
            )
            .await
        })
        .await
    }

    async fn chat_stream(&self, request: ChatRequest) -> GatewayResult<ChatEventStream> {
        crate::opentelemetry::trace_event_stream(
            "chat_stream",
            "POST",
            "/api/chat/stream",
            || async move {
                let headers = self.request_headers()?;

                let mut events = client_utils::post_sse_stream::<ChatRequest, ChatStreamEvent>(
                    &self.client,
                    &format!("{}/api/chat/stream", self.base_url),
                    &request,
                    headers,
                )
                .await?;

                let stream = try_stream! {
                    while let Some(event) = events.next().await {
                        match event? {
                            ChatStreamEvent::Error { message } => {
                                Err(GatewayError::Stream(message))?;
                            }
                            event => yield event,
                        }
                    }
                };

                Ok(ChatEventStream::from_stream(stream))
            },
        )
        .await
    }

    async fn history(&self) -> GatewayResult<HistorySnapshot> {
        crate::opentelemetry::trace_request("history", "GET", "/api/history", || async move {
            let headers = self.request_headers()?;

            client_utils::get_json(
                &self.client,
                &format!("{}/api/history", self.base_url),
                headers,
            )
            .await
        })
        .await
    }

    async fn clear_history(&self) -> GatewayResult<ClearHistoryReceipt> {
        crate::opentelemetry::trace_request(
            "clear_history",
            "DELETE",
            "/api/history",
            || async move {
                let headers = self.request_headers()?;

                client_utils::delete_json(
                    &self.client,
                    &format!("{}/api/history", self.base_url),
                    headers,
                )
                .await
            },
        )
        .await
    }

    async fn list_documents(&self) -> GatewayResult<DocumentList> {
        crate::opentelemetry::trace_request(
            "list_documents",
            "GET",
            "/api/documents",
            || async move {
                let headers = self.request_headers()?;

                client_utils::get_json(
                    &self.client,
                    &format!("{}/api/documents", self.base_url),
                    headers,
                )
                .await
            },
        )
        .await
    }

    async fn delete_document(&self, document_id: &str) -> GatewayResult<DeleteReceipt> {
        crate::opentelemetry::trace_request(
            "delete_document",
            "DELETE",
            "/api/documents/{id}",
            || async move {
                let headers = self.request_headers()?;

                client_utils::delete_json(
                    &self.client,
                    &format!(
                        "{}/api/documents/{}",
                        self.base_url,
                        urlencoding::encode(document_id)
                    ),
                    headers,
                )
                .await
            },
        )
        .await
    }

    async fn clear_documents(&self) -> GatewayResult<ClearDocumentsReceipt> {
        crate::opentelemetry::trace_request(
            "clear_documents",
            "DELETE",
            "/api/documents",
            || async move {
                let headers = self.request_headers()?;

                client_utils::delete_json(
                    &self.client,
                    &format!("{}/api/documents", self.base_url),
                    headers,
                )
                .await
            },
        )
        .await
    }

    async fn health(&self) -> GatewayResult<HealthStatus> {
        crate::opentelemetry::trace_request("health", "GET", "/health", || async move {
            let headers = self.request_headers()?;

            client_utils::get_json(&self.client, &format!("{}/health", self.base_url), headers)
                .await
        })
        .await
    }
}
