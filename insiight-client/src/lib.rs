// SPDX-FileCopyrightText: 2026 The insiight contributors
//
// SPDX-License-Identifier: MPL-2.0

//! Blocking client for the twiist follower service.
//!
//! Logs in against the Cognito user pool of the service, optionally refreshes
//! the access token, and fetches the PWD overviews of the followed account.

use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    StatusCode,
};

mod auth;
mod conf;
mod error;
mod overview;

pub use auth::{AuthFlow, AuthenticationResult};
pub use conf::ClientConf;
pub use error::{ApiError, Error};
pub use overview::{decode_overviews, PwdOverview, PwdStatus, PwdSummary};

use auth::{AuthReply, InitiateAuthRequest};

/// Session with the follower service.
///
/// Tokens live only as long as the value does.
pub struct Client {
    conf: ClientConf,
    http: reqwest::blocking::Client,
    access_token: Option<String>,
    refresh_token: Option<String>,
}

impl Client {
    /// Client for the production service.
    pub fn new() -> Result<Self, Error> {
        Self::with_conf(ClientConf::default())
    }

    pub fn with_conf(conf: ClientConf) -> Result<Self, Error> {
        let http = reqwest::blocking::Client::builder()
            .timeout(conf.timeout)
            .build()?;
        Ok(Self {
            conf,
            http,
            access_token: None,
            refresh_token: None,
        })
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// Log in with username and password, storing both returned tokens.
    ///
    /// Tokens are left untouched on any error.
    pub fn login(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticationResult, Error> {
        let url = self.conf.token_url();
        let req = InitiateAuthRequest::password(&self.conf.client_id, username, password);
        let result = match req.send(&self.http, &url)? {
            AuthReply::Ok(result) => result,
            AuthReply::Rejected(err) => return Err(Error::Login(err)),
        };

        log::info!("logged in, token expires in {} seconds", result.expires_in);
        self.access_token = Some(result.access_token.clone());
        self.refresh_token = result.refresh_token.clone();
        Ok(result)
    }

    /// Trade the stored refresh token for a new access token.
    ///
    /// The refresh token itself is kept, the provider does not rotate it.
    pub fn refresh(&mut self) -> Result<AuthenticationResult, Error> {
        let refresh_token = self
            .refresh_token
            .as_deref()
            .ok_or(Error::NotLoggedIn("refresh"))?;

        let url = self.conf.token_url();
        let req = InitiateAuthRequest::refresh(&self.conf.client_id, refresh_token);
        let result = match req.send(&self.http, &url)? {
            AuthReply::Ok(result) => result,
            AuthReply::Rejected(err) => return Err(Error::Refresh(err)),
        };

        log::info!("token refreshed, expires in {} seconds", result.expires_in);
        self.access_token = Some(result.access_token.clone());
        Ok(result)
    }

    /// Fetch the PWD overviews as the raw, unmodified response body.
    pub fn pwd_overviews(&self) -> Result<Vec<u8>, Error> {
        let access_token = self
            .access_token
            .as_deref()
            .ok_or(Error::NotLoggedIn("access"))?;

        let url = &self.conf.status_url;
        log::debug!("GET {}", url);
        let resp = self
            .http
            .get(url)
            .bearer_auth(access_token)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "*/*")
            .send()?;
        let status = resp.status();
        let body = resp.bytes()?.to_vec();
        log::debug!("{} answered {}", url, status);

        if status != StatusCode::OK {
            let body = String::from_utf8_lossy(&body).into_owned();
            return Err(Error::Api(ApiError::new(url, status, body)));
        }
        Ok(body)
    }
}
