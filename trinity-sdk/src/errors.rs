use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request to the backend failed or the parsing of the response
    /// failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returned a non-OK status code
    #[error("Status error: {1} (Status {0})")]
    Status(reqwest::StatusCode, String),
    /// The response from the backend did not match the endpoint contract.
    #[error("Invariant: {0}")]
    Invariant(String),
    /// The SSE stream carried an in-band error event or undecodable data.
    #[error("Stream error: {0}")]
    Stream(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

impl GatewayError {
    /// Human-readable failure detail, preferring the `detail` or `error`
    /// field the backend puts in its error bodies.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Status(status, body) => extract_detail(body)
                .unwrap_or_else(|| format!("request failed with status {status}")),
            other => other.to_string(),
        }
    }
}

fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["detail", "error"]
        .iter()
        .find_map(|field| value.get(field))
        .and_then(serde_json::Value::as_str)
        .map(ToString::to_string)
}
