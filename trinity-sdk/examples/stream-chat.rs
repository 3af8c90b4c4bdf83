use dotenvy::dotenv;
use futures::stream::StreamExt;
use trinity_sdk::{ChatRequest, Gateway, ReplyAccumulator};

mod common;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let gateway = common::get_gateway();

    let mut stream = gateway
        .chat_stream(ChatRequest::new("@Gemini tell me a short story."))
        .await
        .unwrap();

    let mut accumulator = ReplyAccumulator::new();

    while let Some(event) = stream.next().await {
        let event = event.unwrap();
        accumulator.add_event(event.clone()).unwrap();
        println!("{event:#?}");
    }

    let replies = accumulator.compute_replies().unwrap();
    println!("Final replies: {replies:#?}");
}
