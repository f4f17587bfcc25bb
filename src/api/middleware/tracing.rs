//! HTTP request/response tracing for every route, pages and API alike.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Creates the request tracing layer.
///
/// Each request gets an `INFO` span with method, URI and version. Headers are
/// never recorded, so the `admin_session` cookie and Bearer tokens stay out of
/// the logs.
///
/// - request start is logged at `DEBUG`
/// - responses are logged at `INFO` with latency in milliseconds
/// - 5xx responses are additionally logged at `ERROR`
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/article/on-tools version=HTTP/1.1}: finished processing request latency=3 ms status=200
/// INFO request{method=POST uri=/admin/articles version=HTTP/1.1}: finished processing request latency=9 ms status=303
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(
            DefaultMakeSpan::new()
                .level(Level::INFO)
                .include_headers(false),
        )
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
