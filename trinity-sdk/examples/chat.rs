use dotenvy::dotenv;
use trinity_sdk::{ChatRequest, Gateway};

mod common;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let gateway = common::get_gateway();

    let response = gateway
        .chat(ChatRequest::new("@GPT @Claude what is a monad?"))
        .await
        .unwrap();

    for reply in response.responses {
        println!("[{}] {}", reply.ai_name, reply.response);
    }
}
