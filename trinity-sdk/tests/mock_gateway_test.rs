use futures::StreamExt;
use trinity_sdk::{
    trinity_sdk_test::{MockGateway, MockResult, MockStreamResult},
    AssistantReply, ChatEventStream, ChatRequest, ChatResponse, ChatStreamEvent, DeleteReceipt,
    FileUpload, Gateway, GatewayError, UploadReceipt,
};

fn assistant_reply(ai_name: &str, response: &str) -> AssistantReply {
    AssistantReply {
        ai_name: ai_name.to_string(),
        response: response.to_string(),
        timestamp: "2025-01-15T09:30:00.123456".to_string(),
        has_context: Some(false),
    }
}

fn chat_response(responses: Vec<AssistantReply>) -> ChatResponse {
    ChatResponse {
        success: true,
        responses,
        ..ChatResponse::default()
    }
}

#[tokio::test]
async fn mock_gateway_tracks_chat_requests_and_yields_results() {
    let gateway = MockGateway::new();

    let response1 = chat_response(vec![assistant_reply("GPT", "Hello!")]);
    let response3 = chat_response(vec![assistant_reply("Claude", "Goodbye!")]);

    gateway
        .enqueue_chat(response1.clone())
        .enqueue_chat(MockResult::error(GatewayError::InvalidInput(
            "chat error".to_string(),
        )))
        .enqueue_chat(response3.clone());

    let request1 = ChatRequest::new("Hi");
    let result1 = gateway
        .chat(request1.clone())
        .await
        .expect("first chat should succeed");
    assert_eq!(result1, response1);

    let tracked = gateway.tracked_chat_requests();
    assert_eq!(tracked.len(), 1);
    assert_eq!(tracked[0], request1);

    let request2 = ChatRequest::new("Trigger error");
    let error = gateway
        .chat(request2.clone())
        .await
        .expect_err("second chat should fail");
    match error {
        GatewayError::InvalidInput(message) => assert_eq!(message, "chat error"),
        other => panic!("unexpected error variant: {:?}", other),
    }

    let tracked = gateway.tracked_chat_requests();
    assert_eq!(tracked.len(), 2);
    assert_eq!(tracked[1], request2);

    let request3 = ChatRequest::new("Bye").with_include_context(false);
    let result3 = gateway
        .chat(request3.clone())
        .await
        .expect("third chat should succeed");
    assert_eq!(result3, response3);

    let tracked = gateway.tracked_chat_requests();
    assert_eq!(tracked.len(), 3);
    assert_eq!(tracked[2], request3);

    gateway.reset();
    assert!(gateway.tracked_chat_requests().is_empty());

    gateway.enqueue_chat(chat_response(vec![]));
    gateway.restore();

    let error = gateway
        .chat(ChatRequest::new("after restore"))
        .await
        .expect_err("chat should fail after restore");
    match error {
        GatewayError::Invariant(message) => {
            assert_eq!(message, "no mocked chat results available");
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[tokio::test]
async fn mock_gateway_tracks_uploads() {
    let gateway = MockGateway::new();

    let receipt = UploadReceipt {
        success: true,
        message: "File notes.txt uploaded successfully".to_string(),
        filename: "notes.txt".to_string(),
        file_size: 11,
        ..UploadReceipt::default()
    };

    gateway
        .enqueue_upload(receipt.clone())
        .enqueue_upload(MockResult::error(GatewayError::Status(
            reqwest::StatusCode::BAD_REQUEST,
            r#"{"detail": "Unsupported file type"}"#.to_string(),
        )));

    let file1 = FileUpload::new("notes.txt", b"hello world".to_vec());
    let result = gateway
        .upload(file1.clone())
        .await
        .expect("first upload should succeed");
    assert_eq!(result, receipt);

    let file2 = FileUpload::new("bad.xyz", vec![0, 1, 2]);
    let error = gateway
        .upload(file2.clone())
        .await
        .expect_err("second upload should fail");
    match error {
        GatewayError::Status(status, body) => {
            assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
            assert!(body.contains("Unsupported file type"));
        }
        other => panic!("unexpected error variant: {:?}", other),
    }

    let tracked = gateway.tracked_uploads();
    assert_eq!(tracked.len(), 2);
    assert_eq!(tracked[0], file1);
    assert_eq!(tracked[1], file2);
}

#[tokio::test]
async fn mock_gateway_tracks_document_deletions_and_call_counts() {
    let gateway = MockGateway::new();

    gateway.enqueue_delete_document(DeleteReceipt {
        success: true,
        message: Some("Document deleted successfully".to_string()),
        document_id: Some("files/abc123".to_string()),
        error: None,
    });

    gateway
        .delete_document("files/abc123")
        .await
        .expect("delete should succeed");

    assert_eq!(gateway.tracked_delete_document_ids(), vec!["files/abc123"]);

    let error = gateway
        .list_documents()
        .await
        .expect_err("list should fail without mocked results");
    match error {
        GatewayError::Invariant(message) => {
            assert_eq!(message, "no mocked list documents results available");
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
    assert_eq!(gateway.list_documents_calls(), 1);

    gateway.reset();
    assert!(gateway.tracked_delete_document_ids().is_empty());
    assert_eq!(gateway.list_documents_calls(), 0);
}

#[tokio::test]
async fn mock_gateway_yields_stream_events() {
    let gateway = MockGateway::new();

    let events = vec![
        ChatStreamEvent::Start {
            ai_name: "GPT".to_string(),
        },
        ChatStreamEvent::Chunk {
            ai_name: "GPT".to_string(),
            text: "Hel".to_string(),
        },
        ChatStreamEvent::Chunk {
            ai_name: "GPT".to_string(),
            text: "lo".to_string(),
        },
        ChatStreamEvent::Done {
            ai_name: "GPT".to_string(),
        },
    ];

    gateway
        .enqueue_chat_stream(events.clone())
        .enqueue_chat_stream(MockStreamResult::error(GatewayError::InvalidInput(
            "stream error".to_string(),
        )));

    let request = ChatRequest::new("Hi");
    let stream = gateway
        .chat_stream(request.clone())
        .await
        .expect("first stream should open");
    let collected = collect_stream_events(stream).await;
    assert_eq!(collected, events);

    let tracked = gateway.tracked_chat_stream_requests();
    assert_eq!(tracked.len(), 1);
    assert_eq!(tracked[0], request);

    let error = gateway
        .chat_stream(ChatRequest::new("Trigger error"))
        .await
        .expect_err("second stream should fail");
    match error {
        GatewayError::InvalidInput(message) => assert_eq!(message, "stream error"),
        other => panic!("unexpected error variant: {:?}", other),
    }

    let error = gateway
        .chat_stream(ChatRequest::new("exhausted"))
        .await
        .expect_err("stream should fail once the queue is drained");
    match error {
        GatewayError::Invariant(message) => {
            assert_eq!(message, "no mocked chat stream results available");
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
}

async fn collect_stream_events(mut stream: ChatEventStream) -> Vec<ChatStreamEvent> {
    let mut events = Vec::new();
    while let Some(event) = stream.next().await {
        events.push(event.expect("stream event should not error"));
    }
    events
}
