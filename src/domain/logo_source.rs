//! Third-party services the logo proxy can pull images from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::form_urlencoded;

/// A logo provider.
///
/// Parsed from the `source` query parameter. Only the three names below are
/// accepted; anything else is rejected before an outbound request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LogoSource {
    /// Clearbit logo API. Full-size company logos.
    #[default]
    #[serde(rename = "clearbit")]
    Clearbit,
    /// Google's favicon service at 128px.
    #[serde(rename = "favicon")]
    Favicon,
    /// FaviconKit at 144px.
    #[serde(rename = "faviconKit")]
    FaviconKit,
}

/// Error returned when a `source` value is not one of the known providers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid source '{0}'. Expected one of: clearbit, favicon, faviconKit")]
pub struct UnknownLogoSource(pub String);

impl LogoSource {
    pub const ALL: [LogoSource; 3] = [Self::Clearbit, Self::Favicon, Self::FaviconKit];

    /// Wire name used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clearbit => "clearbit",
            Self::Favicon => "favicon",
            Self::FaviconKit => "faviconKit",
        }
    }

    /// Builds the provider URL for `domain`.
    ///
    /// # Examples
    ///
    /// ```
    /// use freebie_api::domain::logo_source::LogoSource;
    ///
    /// assert_eq!(
    ///     LogoSource::Clearbit.logo_url("github.com"),
    ///     "https://logo.clearbit.com/github.com"
    /// );
    /// ```
    pub fn logo_url(&self, domain: &str) -> String {
        match self {
            Self::Clearbit => format!("https://logo.clearbit.com/{domain}"),
            Self::Favicon => {
                let domain: String = form_urlencoded::byte_serialize(domain.as_bytes()).collect();
                format!("https://www.google.com/s2/favicons?domain={domain}&sz=128")
            }
            Self::FaviconKit => format!("https://api.faviconkit.com/{domain}/144"),
        }
    }
}

impl FromStr for LogoSource {
    type Err = UnknownLogoSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| UnknownLogoSource(s.to_string()))
    }
}

impl fmt::Display for LogoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
