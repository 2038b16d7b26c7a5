//! DTOs for the logo persistence endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::not_blank;
use crate::domain::entities::PersistedLogo;

/// Request to fetch and persist a company logo.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveLogoRequest {
    #[validate(required, custom(function = "not_blank"))]
    pub logo_url: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub company_name: Option<String>,
}

/// Response after a logo was saved or found already saved.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveLogoResponse {
    pub success: bool,
    pub local_path: String,
    pub original_url: String,
    pub company: String,
}

impl From<PersistedLogo> for SaveLogoResponse {
    fn from(logo: PersistedLogo) -> Self {
        Self {
            success: true,
            local_path: logo.public_path,
            original_url: logo.original_url,
            company: logo.company,
        }
    }
}
