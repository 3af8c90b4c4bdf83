//! Test doubles for the [`Gateway`](crate::Gateway) trait.

mod gateway;

pub use gateway::{MockGateway, MockResult, MockStreamResult};
