// SPDX-FileCopyrightText: 2026 The insiight contributors
//
// SPDX-License-Identifier: MPL-2.0

use reqwest::{blocking::Client, header::CONTENT_TYPE, StatusCode};
use std::collections::BTreeMap;

use crate::error::ApiError;

const AMZ_JSON: &str = "application/x-amz-json-1.1";
const INITIATE_AUTH_TARGET: &str = "AWSCognitoIdentityProviderService.InitiateAuth";

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthFlow {
    UserPasswordAuth,
    RefreshTokenAuth,
}

/// `InitiateAuth` call body. Holds the password, so no `Debug`.
#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct InitiateAuthRequest<'a> {
    pub auth_flow: AuthFlow,
    pub client_id: &'a str,
    pub auth_parameters: BTreeMap<&'static str, &'a str>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct InitiateAuthResponse {
    pub authentication_result: AuthenticationResult,
}

/// Tokens minted by the identity provider.
///
/// The refresh flow never returns a `refresh_token`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthenticationResult {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: String,
    /// Lifetime of `access_token` in seconds.
    #[serde(default)]
    pub expires_in: u64,
}

pub(crate) enum AuthReply {
    Ok(AuthenticationResult),
    Rejected(ApiError),
}

impl<'a> InitiateAuthRequest<'a> {
    pub fn password(client_id: &'a str, username: &'a str, password: &'a str) -> Self {
        let mut auth_parameters = BTreeMap::new();
        auth_parameters.insert("USERNAME", username);
        auth_parameters.insert("PASSWORD", password);
        Self {
            auth_flow: AuthFlow::UserPasswordAuth,
            client_id,
            auth_parameters,
        }
    }

    pub fn refresh(client_id: &'a str, refresh_token: &'a str) -> Self {
        let mut auth_parameters = BTreeMap::new();
        auth_parameters.insert("REFRESH_TOKEN", refresh_token);
        Self {
            auth_flow: AuthFlow::RefreshTokenAuth,
            client_id,
            auth_parameters,
        }
    }

    pub fn send(&self, client: &Client, url: &str) -> Result<AuthReply, crate::Error> {
        let body = serde_json::to_vec(self)?;
        log::debug!("POST {} ({:?})", url, self.auth_flow);
        let resp = client
            .post(url)
            .header(CONTENT_TYPE, AMZ_JSON)
            .header("X-Amz-Target", INITIATE_AUTH_TARGET)
            .body(body)
            .send()?;
        let status = resp.status();
        let bytes = resp.bytes()?;
        log::debug!("{} answered {}", url, status);

        if status != StatusCode::OK {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            return Ok(AuthReply::Rejected(ApiError::new(url, status, body)));
        }

        let resp: InitiateAuthResponse = serde_json::from_slice(&bytes)?;
        Ok(AuthReply::Ok(resp.authentication_result))
    }
}
