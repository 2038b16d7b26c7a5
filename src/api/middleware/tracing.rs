//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Request tracing for every route, static logos included.
///
/// - One `INFO` span per request carrying method, URI and version. The URI
///   keeps the query string, so proxied domains show up in the logs.
/// - Request start is logged at `DEBUG` only; logo traffic is noisy.
/// - Responses are logged at `INFO` with status and latency in milliseconds.
/// - 5xx responses are additionally reported at `WARN`.
///
/// ```text
/// INFO request{method=GET uri=/api/logo?domain=github.com version=HTTP/1.1}: finished processing request latency=182 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::WARN)
                .latency_unit(LatencyUnit::Millis),
        )
}
