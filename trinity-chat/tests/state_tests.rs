use chrono::{DateTime, Utc};
use trinity_chat::{
    AssistantEntry, ChatState, Event, Notice, Origin, Severity, TranscriptEntry,
};
use trinity_sdk::{DocumentMetadata, FileUpload};

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).expect("timestamp should be valid")
}

fn document(name: &str) -> DocumentMetadata {
    DocumentMetadata {
        name: name.to_string(),
        display_name: format!("{name}.txt"),
        uri: format!("https://example.com/{name}"),
        mime_type: "text/plain".to_string(),
        state: Some("ACTIVE".to_string()),
        upload_time: 1_736_932_200.0,
    }
}

#[test]
fn draft_edits_accumulate_until_send_starts() {
    let mut state = ChatState::new();

    state.apply(Event::DraftEdited {
        text: "hello".to_string(),
    });
    state.apply(Event::FileAttached {
        file: FileUpload::new("notes.txt", b"hi".to_vec()),
    });
    assert_eq!(state.draft().text, "hello");
    assert!(state.draft().attachment.is_some());
    assert!(!state.is_sending());

    state.apply(Event::SendStarted);
    assert!(state.draft().text.is_empty());
    assert!(state.draft().attachment.is_none());
    assert!(state.is_sending());

    state.apply(Event::SendSettled);
    assert!(!state.is_sending());
}

#[test]
fn attachment_can_be_cleared_without_sending() {
    let mut state = ChatState::new();

    state.apply(Event::FileAttached {
        file: FileUpload::new("notes.txt", b"hi".to_vec()),
    });
    state.apply(Event::AttachmentCleared);
    assert!(state.draft().attachment.is_none());
}

#[test]
fn upload_progress_tracks_started_and_settled() {
    let mut state = ChatState::new();

    state.apply(Event::UploadStarted {
        file_name: "notes.txt".to_string(),
    });
    assert_eq!(state.upload_in_progress(), Some("notes.txt"));

    state.apply(Event::UploadSettled);
    assert_eq!(state.upload_in_progress(), None);
}

#[test]
fn transcript_appends_in_event_order() {
    let mut state = ChatState::new();

    state.apply(Event::UserCommitted {
        text: "hello".to_string(),
        at: at(1),
    });
    state.apply(Event::RepliesReceived {
        entries: vec![
            AssistantEntry {
                origin: Origin::Gpt,
                text: "Hi!".to_string(),
                at: at(2),
            },
            AssistantEntry {
                origin: Origin::Claude,
                text: "Hello!".to_string(),
                at: at(3),
            },
        ],
    });
    state.apply(Event::Noticed {
        notice: Notice::transcript(Severity::Info, "File uploaded: notes.txt"),
        at: at(4),
    });

    let transcript = state.transcript();
    assert_eq!(transcript.len(), 4);
    assert!(matches!(transcript[0], TranscriptEntry::User(_)));
    assert_eq!(transcript[0].text(), "hello");
    match &transcript[1] {
        TranscriptEntry::Assistant(entry) => assert_eq!(entry.origin, Origin::Gpt),
        other => panic!("expected assistant entry, got: {other:?}"),
    }
    match &transcript[2] {
        TranscriptEntry::Assistant(entry) => assert_eq!(entry.origin, Origin::Claude),
        other => panic!("expected assistant entry, got: {other:?}"),
    }
    assert!(matches!(transcript[3], TranscriptEntry::System(_)));
    assert_eq!(transcript[3].text(), "File uploaded: notes.txt");
}

#[test]
fn stale_document_listing_is_discarded() {
    let mut state = ChatState::new();

    state.apply(Event::DocumentsLoaded {
        seq: 2,
        documents: vec![document("files/a"), document("files/b")],
    });
    assert_eq!(state.documents().len(), 2);
    assert_eq!(state.documents_seq(), 2);

    // A response from an older refresh arrives late.
    state.apply(Event::DocumentsLoaded {
        seq: 1,
        documents: vec![document("files/stale")],
    });
    assert_eq!(state.documents().len(), 2);
    assert_eq!(state.documents()[0].name, "files/a");
    assert_eq!(state.documents_seq(), 2);

    state.apply(Event::DocumentsLoaded {
        seq: 3,
        documents: vec![document("files/c")],
    });
    assert_eq!(state.documents().len(), 1);
    assert_eq!(state.documents()[0].name, "files/c");
    assert_eq!(state.documents_seq(), 3);
}

#[test]
fn notices_route_by_channel() {
    let mut state = ChatState::new();

    state.apply(Event::Noticed {
        notice: Notice::transcript(Severity::Error, "Error: backend down"),
        at: at(1),
    });
    state.apply(Event::Noticed {
        notice: Notice::alert(Severity::Error, "Failed to delete document: gone"),
        at: at(2),
    });
    state.apply(Event::Noticed {
        notice: Notice::log(Severity::Warning, "Failed to load documents: timeout"),
        at: at(3),
    });

    assert_eq!(state.transcript().len(), 1);
    assert_eq!(state.transcript()[0].text(), "Error: backend down");

    assert_eq!(state.alerts().len(), 1);
    assert_eq!(state.alerts()[0].text, "Failed to delete document: gone");

    let drained = state.take_alerts();
    assert_eq!(drained.len(), 1);
    assert!(state.alerts().is_empty());
}

#[test]
fn history_cleared_empties_transcript() {
    let mut state = ChatState::new();

    state.apply(Event::UserCommitted {
        text: "hello".to_string(),
        at: at(1),
    });
    state.apply(Event::HistoryCleared);
    assert!(state.transcript().is_empty());
}

#[test]
fn hydrated_replaces_transcript_wholesale() {
    let mut state = ChatState::new();

    state.apply(Event::UserCommitted {
        text: "local only".to_string(),
        at: at(1),
    });
    state.apply(Event::Hydrated {
        entries: vec![
            TranscriptEntry::user("from server", at(2)),
            TranscriptEntry::assistant(Origin::Gemini, "reply", at(3)),
        ],
    });

    let transcript = state.transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0].text(), "from server");
    assert_eq!(transcript[1].text(), "reply");
}
