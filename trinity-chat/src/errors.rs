use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] trinity_sdk::GatewayError),
    #[error("Unsupported file type: {0}")]
    UnsupportedFile(String),
}
