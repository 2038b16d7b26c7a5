//! Filesystem-safe logo filenames.
//!
//! A persisted logo's filename depends only on the company name and the file
//! extension found in the source URL's path. Existing assets were named with
//! these exact rules, so they must not drift.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// URL prefix persisted logos are served under.
pub const LOGOS_URL_PREFIX: &str = "/logos";

/// Extension used when the source URL path has none.
pub const DEFAULT_EXTENSION: &str = "png";

static NON_ALPHANUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());
static HYPHEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// Reduces a company name to lowercase ASCII alphanumerics separated by single hyphens.
///
/// # Examples
///
/// ```
/// use freebie_api::domain::logo_filename::sanitize_company_name;
///
/// assert_eq!(sanitize_company_name("Canva Pro"), "canva-pro");
/// assert_eq!(sanitize_company_name("AI/Cloud!!"), "ai-cloud");
/// ```
pub fn sanitize_company_name(company_name: &str) -> String {
    let lowered = company_name.to_lowercase();
    let replaced = NON_ALPHANUMERIC_RUN.replace_all(&lowered, "-");
    let collapsed = HYPHEN_RUN.replace_all(&replaced, "-");
    collapsed.trim_matches('-').to_string()
}

/// Returns the lowercased extension of the last path segment of `url`.
///
/// Falls back to [`DEFAULT_EXTENSION`] when the segment has no dot, or when what
/// follows the dot is not plain ASCII alphanumerics (percent-encoded junk,
/// trailing dot). The response content type is never consulted.
pub fn extension_from_url(url: &Url) -> String {
    let last_segment = url.path().rsplit('/').next().unwrap_or_default();

    match last_segment.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() && ext.bytes().all(|b| b.is_ascii_alphanumeric()) => {
            ext.to_ascii_lowercase()
        }
        _ => DEFAULT_EXTENSION.to_string(),
    }
}

/// Builds `<sanitized-name>.<extension>` for a company logo hosted at `url`.
pub fn logo_filename(company_name: &str, url: &Url) -> String {
    format!(
        "{}.{}",
        sanitize_company_name(company_name),
        extension_from_url(url)
    )
}

/// Public URL path of a persisted logo.
pub fn public_path(filename: &str) -> String {
    format!("{LOGOS_URL_PREFIX}/{filename}")
}
