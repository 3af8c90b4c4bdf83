use dotenvy::dotenv;
use std::{env, error::Error, sync::Arc};
use trinity_chat::{ChatSession, TranscriptEntry};
use trinity_sdk::{FileUpload, HttpGateway, HttpGatewayOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();

    let gateway = Arc::new(HttpGateway::new(HttpGatewayOptions {
        base_url: env::var("TRINITY_BASE_URL").ok(),
        ..Default::default()
    }));

    let mut session = ChatSession::builder(gateway).build();

    session.hydrate().await?;
    println!(
        "Loaded {} transcript entries.",
        session.state().transcript().len()
    );

    session.refresh_documents().await;
    for document in session.state().documents() {
        println!("Document: {}", document.display_name);
    }

    session.attach_file(FileUpload::new(
        "notes.txt",
        b"Trinity keeps shared context for every assistant.".to_vec(),
    ))?;
    session.set_draft_text("@GPT @Claude summarize the uploaded notes.");
    session.submit().await;

    for entry in session.state().transcript() {
        match entry {
            TranscriptEntry::User(user) => println!("you: {}", user.text),
            TranscriptEntry::Assistant(assistant) => {
                println!("{}: {}", assistant.origin.display_name(), assistant.text);
            }
            TranscriptEntry::System(system) => println!("* {}", system.text),
        }
    }

    for alert in session.take_alerts() {
        eprintln!("alert: {}", alert.text);
    }

    Ok(())
}
