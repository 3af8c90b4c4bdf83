mod accumulator;
mod client_utils;
mod errors;
mod gateway;
mod http;
mod opentelemetry;
pub mod trinity_sdk_test;
mod types;
mod types_ext;

pub use accumulator::{ReplyAccumulator, StreamedReply};
pub use errors::*;
pub use gateway::{ChatEventStream, Gateway};
pub use http::{HttpGateway, HttpGatewayOptions};
pub use types::*;
