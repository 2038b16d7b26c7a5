//! DTOs for the logo proxy endpoint.

use serde::Deserialize;

/// Query string of `GET /api/logo`.
///
/// Both fields stay strings so that a bad `source` is reported with the
/// endpoint's own `{error}` body instead of a query extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct LogoQuery {
    pub domain: Option<String>,
    pub source: Option<String>,
}
