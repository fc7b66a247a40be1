use serde_json::Value;
use thiserror::Error;

use super::RawProfile;
use crate::http::{Client, HttpError};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile request failed: {0}")]
    Request(#[from] HttpError),
    #[error("profile request returned status {status}")]
    Status { status: u16 },
    #[error("profile response is not a JSON object: {0}")]
    Decode(String),
}

/// GET one profile record. Non-2xx statuses and non-object bodies are errors.
pub async fn fetch_profile(url: String) -> Result<RawProfile, ProfileError> {
    let response = Client::get(url)
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.is_success() {
        return Err(ProfileError::Status {
            status: response.status,
        });
    }

    let body: Value = response.json().map_err(|e| {
        let content_type = response.header("content-type").unwrap_or("none");
        ProfileError::Decode(format!("{e} (content-type: {content_type})"))
    })?;
    if !body.is_object() {
        return Err(ProfileError::Decode(format!("expected an object, got {body}")));
    }
    serde_json::from_value(body).map_err(|e| ProfileError::Decode(e.to_string()))
}
