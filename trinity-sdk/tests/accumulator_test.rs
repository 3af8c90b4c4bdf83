use trinity_sdk::{ChatStreamEvent, GatewayError, ReplyAccumulator, StreamedReply};

fn start(ai_name: &str) -> ChatStreamEvent {
    ChatStreamEvent::Start {
        ai_name: ai_name.to_string(),
    }
}

fn chunk(ai_name: &str, text: &str) -> ChatStreamEvent {
    ChatStreamEvent::Chunk {
        ai_name: ai_name.to_string(),
        text: text.to_string(),
    }
}

fn done(ai_name: &str) -> ChatStreamEvent {
    ChatStreamEvent::Done {
        ai_name: ai_name.to_string(),
    }
}

#[test]
fn accumulator_folds_interleaved_replies_in_arrival_order() {
    let mut accumulator = ReplyAccumulator::new();
    let events = vec![
        start("GPT"),
        start("Claude"),
        chunk("GPT", "Hel"),
        chunk("Claude", "Wo"),
        chunk("GPT", "lo"),
        done("GPT"),
        chunk("Claude", "rld"),
        done("Claude"),
    ];
    for event in events {
        accumulator
            .add_event(event)
            .expect("event should be accepted");
    }

    assert_eq!(accumulator.size(), 2);
    let replies = accumulator
        .compute_replies()
        .expect("completed stream should fold into replies");
    assert_eq!(
        replies,
        vec![
            StreamedReply {
                ai_name: "GPT".to_string(),
                text: "Hello".to_string(),
            },
            StreamedReply {
                ai_name: "Claude".to_string(),
                text: "World".to_string(),
            },
        ]
    );
}

#[test]
fn accumulator_accepts_chunks_without_explicit_start() {
    let mut accumulator = ReplyAccumulator::new();
    accumulator
        .add_event(chunk("Gemini", "Hi"))
        .expect("chunk should open a reply");
    accumulator
        .add_event(done("Gemini"))
        .expect("done should close the reply");

    let replies = accumulator
        .compute_replies()
        .expect("completed stream should fold into replies");
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].ai_name, "Gemini");
    assert_eq!(replies[0].text, "Hi");
}

#[test]
fn accumulator_rejects_chunk_after_done() {
    let mut accumulator = ReplyAccumulator::new();
    accumulator
        .add_event(start("GPT"))
        .expect("start should be accepted");
    accumulator
        .add_event(done("GPT"))
        .expect("done should be accepted");

    let error = accumulator
        .add_event(chunk("GPT", "late"))
        .expect_err("chunk after done should be rejected");
    assert!(error.contains("GPT"));
}

#[test]
fn accumulator_surfaces_error_events() {
    let mut accumulator = ReplyAccumulator::new();
    accumulator
        .add_event(start("GPT"))
        .expect("start should be accepted");

    let error = accumulator
        .add_event(ChatStreamEvent::Error {
            message: "model unavailable".to_string(),
        })
        .expect_err("error event should surface");
    assert_eq!(error, "model unavailable");
}

#[test]
fn accumulator_rejects_incomplete_stream() {
    let mut accumulator = ReplyAccumulator::new();
    accumulator
        .add_event(start("GPT"))
        .expect("start should be accepted");
    accumulator
        .add_event(chunk("GPT", "Hi"))
        .expect("chunk should be accepted");

    let error = accumulator
        .compute_replies()
        .expect_err("stream without done should not fold");
    match error {
        GatewayError::Stream(message) => assert!(message.contains("GPT")),
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[test]
fn accumulator_clear_resets_state() {
    let mut accumulator = ReplyAccumulator::new();
    assert!(accumulator.is_empty());

    accumulator
        .add_event(start("GPT"))
        .expect("start should be accepted");
    assert_eq!(accumulator.size(), 1);
    assert!(!accumulator.is_empty());

    accumulator.clear();
    assert!(accumulator.is_empty());
    assert_eq!(accumulator.size(), 0);
}
