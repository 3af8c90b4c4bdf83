use crate::{ChatEventStream, GatewayResult};
use futures::StreamExt;
use opentelemetry::trace::Status;
use std::time::Instant;
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub(crate) struct RequestSpan {
    span: Span,
    start_time: Instant,
    time_to_first_event: Option<f64>,
}

impl RequestSpan {
    pub fn new(operation: &str, method: &str, path: &str, streaming: bool) -> Self {
        let span = if streaming {
            info_span!("trinity_sdk.stream")
        } else {
            info_span!("trinity_sdk.request")
        };
        span.set_attribute("trinity_sdk.operation", operation.to_string());
        span.set_attribute("http.request.method", method.to_string());
        span.set_attribute("url.path", path.to_string());

        Self {
            span,
            start_time: Instant::now(),
            time_to_first_event: None,
        }
    }

    fn span(&self) -> Span {
        self.span.clone()
    }

    pub async fn instrument_future<F>(&self, future: F) -> F::Output
    where
        F: std::future::Future,
    {
        future.instrument(self.span()).await
    }

    pub fn on_event(&mut self) {
        if self.time_to_first_event.is_none() {
            self.time_to_first_event = Some(self.start_time.elapsed().as_secs_f64());
        }
    }

    pub fn on_error(&mut self, error: &(dyn std::error::Error + 'static)) {
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
    }

    pub fn on_end(&mut self) {
        if let Some(time_to_first_event) = self.time_to_first_event {
            self.span
                .set_attribute("trinity_sdk.time_to_first_event", time_to_first_event);
        }
    }
}

impl Drop for RequestSpan {
    fn drop(&mut self) {
        self.on_end();
    }
}

pub(crate) async fn trace_request<R, F, Fut>(
    operation: &'static str,
    method: &'static str,
    path: &'static str,
    f: F,
) -> GatewayResult<R>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = GatewayResult<R>>,
{
    let mut span = RequestSpan::new(operation, method, path, false);
    let result = span.instrument_future(f()).await;

    if let Err(error) = &result {
        span.on_error(error);
    }

    span.on_end();
    result
}

pub(crate) async fn trace_event_stream<F, Fut>(
    operation: &'static str,
    method: &'static str,
    path: &'static str,
    f: F,
) -> GatewayResult<ChatEventStream>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = GatewayResult<ChatEventStream>>,
{
    let mut span = RequestSpan::new(operation, method, path, true);
    let stream_result = span.instrument_future(f()).await;

    match stream_result {
        Ok(mut stream) => {
            let span_handle = span.span();
            let streaming_span = span;
            let instrumented = async_stream::try_stream! {
                let mut span_state = streaming_span;

                while let Some(item) = stream.next().await {
                    match item {
                        Ok(event) => {
                            span_state.on_event();
                            yield event;
                        }
                        Err(err) => {
                            span_state.on_error(&err);
                            Err(err)?;
                        }
                    }
                }
            }
            .instrument(span_handle);

            Ok(ChatEventStream::from_stream(instrumented))
        }
        Err(error) => {
            span.on_error(&error);
            span.on_end();
            Err(error)
        }
    }
}
