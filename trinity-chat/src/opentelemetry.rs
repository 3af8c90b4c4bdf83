use opentelemetry::trace::Status;
use std::future::Future;
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// What a submit accomplished, recorded on its span when it settles.
#[derive(Debug, Default)]
pub(crate) struct SubmitSummary {
    pub uploaded: bool,
    pub replies: usize,
    pub failure: Option<String>,
}

pub(crate) struct SubmitSpan {
    span: Span,
}

impl SubmitSpan {
    pub fn new(has_attachment: bool, has_text: bool) -> Self {
        let span = info_span!("trinity_chat.submit");
        span.set_attribute("trinity_chat.method", "submit");
        span.set_attribute("trinity_chat.has_attachment", has_attachment);
        span.set_attribute("trinity_chat.has_text", has_text);

        Self { span }
    }

    pub fn span(&self) -> Span {
        self.span.clone()
    }

    pub fn on_summary(&self, summary: &SubmitSummary) {
        self.span
            .set_attribute("trinity_chat.uploaded", summary.uploaded);
        self.span.set_attribute(
            "trinity_chat.replies",
            i64::try_from(summary.replies).unwrap_or(i64::MAX),
        );
        if let Some(failure) = &summary.failure {
            self.span.set_attribute("exception.message", failure.clone());
            self.span.set_status(Status::error(failure.clone()));
        }
    }
}

pub(crate) async fn trace_submit<Fut>(
    has_attachment: bool,
    has_text: bool,
    future: Fut,
) -> SubmitSummary
where
    Fut: Future<Output = SubmitSummary> + Send,
{
    let span = SubmitSpan::new(has_attachment, has_text);
    let summary = future.instrument(span.span()).await;
    span.on_summary(&summary);
    summary
}
