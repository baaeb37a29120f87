//! Display-only decoding of the compact credential handed back by the
//! third-party sign-in button.
//!
//! Nothing here verifies a signature. The decoded [`IdentitySnapshot`] is a
//! claim made by whoever produced the token, good for greeting a visitor and
//! nothing else. Never gate anything on it.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("expected 3 dot-separated segments, found {found}")]
    SegmentCount { found: usize },
    #[error("payload segment is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not valid UTF-8: {0}")]
    PercentDecoding(#[from] std::string::FromUtf8Error),
    #[error("payload is not valid JSON: {0}")]
    Payload(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IdentitySnapshot {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub picture: Option<String>,
}

pub fn decode_identity(token: &str) -> Result<IdentitySnapshot, DecodeError> {
    decode_claims(token)
}

/// Decodes the middle segment of a `header.payload.signature` token into `T`.
pub fn decode_claims<T: DeserializeOwned>(token: &str) -> Result<T, DecodeError> {
    let segments: Vec<&str> = token.split('.').collect();
    let payload = match segments.as_slice() {
        [_, payload, _] => *payload,
        _ => {
            return Err(DecodeError::SegmentCount {
                found: segments.len(),
            })
        }
    };

    let bytes = BASE64.decode(to_standard_alphabet(payload))?;
    let escaped: String = bytes.iter().map(|b| format!("%{:02x}", b)).collect();
    let text = urlencoding::decode(&escaped)?;

    Ok(serde_json::from_str(&text)?)
}

fn to_standard_alphabet(segment: &str) -> String {
    let mut standard: String = segment
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    let padding = (4 - standard.len() % 4) % 4;
    standard.push_str(&"=".repeat(padding));
    standard
}
