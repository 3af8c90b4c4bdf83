use dotenvy::dotenv;
use trinity_sdk::{FileUpload, Gateway};

mod common;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let gateway = common::get_gateway();

    let receipt = gateway
        .upload(FileUpload::new(
            "notes.txt",
            b"Trinity keeps shared context for every assistant.".to_vec(),
        ))
        .await
        .unwrap();
    println!("Uploaded: {receipt:#?}");

    let list = gateway.list_documents().await.unwrap();
    println!("Documents ({}):", list.count);
    for document in &list.documents {
        println!("  {} ({})", document.display_name, document.name);
    }

    if let Some(document) = list.documents.first() {
        let deleted = gateway.delete_document(&document.name).await.unwrap();
        println!("Deleted: {deleted:#?}");
    }
}
