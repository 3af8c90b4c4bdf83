use crate::GatewayError;
use eventsource_stream::Eventsource;
use futures::{stream::StreamExt, Stream};
use reqwest::{multipart::Form, Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::pin::Pin;

/// Sentinel event that terminates a chat stream.
pub(crate) const STREAM_SENTINEL: &str = "[COMPLETE]";

/// Create a GET request, parse the JSON response.
/// Throws error on non OK status code.
pub async fn get_json<R: DeserializeOwned>(
    client: &Client,
    url: &str,
    headers: reqwest::header::HeaderMap,
) -> Result<R, GatewayError> {
    let response = client.get(url).headers(headers).send().await?;
    parse_json(response).await
}

/// Create a JSON POST request, parse the response.
/// Throws error on non OK status code.
pub async fn post_json<T: Serialize, R: DeserializeOwned>(
    client: &Client,
    url: &str,
    data: &T,
    headers: reqwest::header::HeaderMap,
) -> Result<R, GatewayError> {
    let response = client.post(url).headers(headers).json(data).send().await?;
    parse_json(response).await
}

/// Create a DELETE request, parse the JSON response.
/// Throws error on non OK status code.
pub async fn delete_json<R: DeserializeOwned>(
    client: &Client,
    url: &str,
    headers: reqwest::header::HeaderMap,
) -> Result<R, GatewayError> {
    let response = client.delete(url).headers(headers).send().await?;
    parse_json(response).await
}

/// Create a multipart POST request, parse the JSON response.
/// Throws error on non OK status code.
pub async fn post_multipart<R: DeserializeOwned>(
    client: &Client,
    url: &str,
    form: Form,
    headers: reqwest::header::HeaderMap,
) -> Result<R, GatewayError> {
    let response = client
        .post(url)
        .headers(headers)
        .multipart(form)
        .send()
        .await?;
    parse_json(response).await
}

async fn parse_json<R: DeserializeOwned>(response: Response) -> Result<R, GatewayError> {
    if response.status().is_success() {
        Ok(response.json::<R>().await?)
    } else {
        Err(GatewayError::Status(
            response.status(),
            response.text().await.unwrap_or_default(),
        ))
    }
}

/// Create a JSON POST request that returns an SSE stream.
/// Throws error on non OK status code.
async fn post_sse<T: Serialize>(
    client: &Client,
    url: &str,
    data: &T,
    headers: reqwest::header::HeaderMap,
) -> Result<
    impl StreamExt<
        Item = Result<
            eventsource_stream::Event,
            eventsource_stream::EventStreamError<reqwest::Error>,
        >,
    >,
    GatewayError,
> {
    let response = client.post(url).headers(headers).json(data).send().await?;

    if response.status().is_success() {
        Ok(response.bytes_stream().eventsource())
    } else {
        Err(GatewayError::Status(
            response.status(),
            response.text().await.unwrap_or_default(),
        ))
    }
}

/// Create a JSON POST request that returns a typed stream of parsed events.
/// Handles SSE parsing, JSON deserialization, and error conversion.
/// Automatically handles "[COMPLETE]" termination.
pub async fn post_sse_stream<T: Serialize + 'static, R: DeserializeOwned + Send + 'static>(
    client: &Client,
    url: &str,
    data: &T,
    headers: reqwest::header::HeaderMap,
) -> Result<Pin<Box<dyn Stream<Item = Result<R, GatewayError>> + Send>>, GatewayError> {
    let mut sse_stream = post_sse(client, url, data, headers).await?;

    let stream = async_stream::try_stream! {
        while let Some(event) = sse_stream.next().await {
            match event {
                Ok(event) => {
                    if event.data.is_empty() {
                        continue; // Skip empty events
                    }
                    if event.data == STREAM_SENTINEL {
                        break; // End of stream
                    }

                    let chunk: R = serde_json::from_str(&event.data)
                        .map_err(|e| {
                            GatewayError::Stream(
                                format!("Failed to parse stream event: {e}")
                            )
                        })?;

                    yield chunk;
                }
                Err(e) => {
                    match e {
                        eventsource_stream::EventStreamError::Utf8(_) => {
                            Err(GatewayError::Stream(
                                "Receive invalid UTF-8 sequence for stream data".to_string()
                            ))?;
                        }
                        eventsource_stream::EventStreamError::Parser(error) => {
                            Err(GatewayError::Stream(
                                format!("Receive invalid EventStream data: {error}")
                            ))?;
                        },
                        eventsource_stream::EventStreamError::Transport(e) => {
                            Err(GatewayError::Transport(e))?;
                        }
                    }
                }
            }
        }
    };

    Ok(Box::pin(stream))
}
