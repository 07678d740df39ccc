// SPDX-FileCopyrightText: 2026 The insiight contributors
//
// SPDX-License-Identifier: MPL-2.0

use std::fmt;

/// A non-200 reply from one of the remote endpoints.
///
/// `body` is the response body exactly as received. Nothing is redacted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub endpoint: String,
    pub code: u16,
    pub canonical_reason: Option<&'static str>,
    pub body: String,
}

impl ApiError {
    pub(crate) fn new(endpoint: &str, status: reqwest::StatusCode, body: String) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            code: status.as_u16(),
            canonical_reason: status.canonical_reason(),
            body,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error = if let Some(reason) = self.canonical_reason {
            format!("{} {}", self.code, reason)
        } else {
            format!("{}", self.code)
        };
        if self.body.is_empty() {
            write!(f, "'{}' from API endpoint '{}'", error, self.endpoint)
        } else {
            write!(
                f,
                "'{}' from API endpoint '{}': {}",
                error, self.endpoint, self.body
            )
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("login failed: {0}")]
    Login(ApiError),
    #[error("token refresh failed: {0}")]
    Refresh(ApiError),
    #[error("API call failed: {0}")]
    Api(ApiError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("not logged in: {0} token missing")]
    NotLoggedIn(&'static str),
}

impl Error {
    /// Status code of a rejected request, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Login(err) | Self::Refresh(err) | Self::Api(err) => Some(err.code),
            _ => None,
        }
    }
}
