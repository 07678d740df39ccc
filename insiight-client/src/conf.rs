// SPDX-FileCopyrightText: 2026 The insiight contributors
//
// SPDX-License-Identifier: MPL-2.0

use std::time::Duration;

const DEFAULT_IDP_URL: &str = "https://cognito-idp.us-east-1.amazonaws.com";
const DEFAULT_STATUS_URL: &str = "https://follower-service.mytwiistportal.com/pwd/overviews";
const DEFAULT_CLIENT_ID: &str = "65ev2vbkr2mle7uu4cqkn7ohgl";
const DEFAULT_USER_POOL_ID: &str = "us-east-1_fnkWvSdfv";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Endpoints and identity of the client.
///
/// `Default` is the production service. Other values exist so the client can
/// be pointed at a local server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConf {
    pub idp_url: String,
    pub status_url: String,
    pub client_id: String,
    pub user_pool_id: String,
    pub timeout: Duration,
}

impl Default for ClientConf {
    fn default() -> Self {
        Self {
            idp_url: DEFAULT_IDP_URL.to_string(),
            status_url: DEFAULT_STATUS_URL.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            user_pool_id: DEFAULT_USER_POOL_ID.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConf {
    /// Conf with both endpoints on `base_url`, keeping the default identity.
    pub fn with_base_url(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self {
            idp_url: base_url.to_string(),
            status_url: format!("{}/pwd/overviews", base_url),
            ..Self::default()
        }
    }

    /// Token endpoint of the user pool: `<idp url>/<pool id>`.
    pub fn token_url(&self) -> String {
        format!(
            "{}/{}",
            self.idp_url.trim_end_matches('/'),
            self.user_pool_id
        )
    }
}
