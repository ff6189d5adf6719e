use chrono::Utc;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde_json::json;

use super::jwt;
use crate::error::AppError;
use crate::models::unit::Unit;

const BASE_URL: &str = "https://pool.aseko.com/api/v2/";

const PATH_LOGIN: &str = "login";
const PATH_LOGOUT: &str = "logout";
const PATH_REFRESH: &str = "refresh";
const PATH_UNITS: &str = "units";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenPair {
    access_token: String,
    refresh_token: String,
}

#[derive(Debug, Deserialize)]
struct UnitsResponse {
    items: Vec<Unit>,
}

/// An Aseko Pool Live account: credential state plus the request pipeline.
///
/// Holds a short-lived access token and a long-lived refresh token. Every
/// operation except `refresh` itself checks the access token's expiry claim
/// first and refreshes it transparently when a refresh token is on hand.
pub struct Account {
    client: reqwest::Client,
    base_url: String,
    username: Option<String>,
    password: Option<String>,
    access_token: Option<String>,
    refresh_token: Option<String>,
    verbose: bool,
}

fn build_http_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .user_agent(concat!("aseko/", env!("CARGO_PKG_VERSION")))
        .timeout(std::time::Duration::from_secs(15))
        .build()?)
}

impl Account {
    pub fn new(base_url: Option<String>, verbose: bool) -> Result<Self, AppError> {
        Ok(Self {
            client: build_http_client()?,
            base_url: base_url.unwrap_or_else(|| BASE_URL.to_string()),
            username: None,
            password: None,
            access_token: None,
            refresh_token: None,
            verbose,
        })
    }

    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.username = Some(username.to_string());
        self.password = Some(password.to_string());
        self
    }

    pub fn with_tokens(mut self, access_token: Option<String>, refresh_token: Option<String>) -> Self {
        self.access_token = access_token;
        self.refresh_token = refresh_token;
        self
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// An access token counts as valid only when it is present, carries an
    /// `exp` claim, and that expiry is still in the future. A token that
    /// fails to decode is an error, not a valid token.
    fn is_access_token_valid(&self) -> Result<bool, AppError> {
        let Some(token) = &self.access_token else {
            return Ok(false);
        };
        let claims = jwt::decode_unverified(token)?;
        Ok(claims.exp.is_some_and(|exp| Utc::now().timestamp() < exp))
    }

    /// Issue a request without the refresh guard. Maps 401 to `Auth` and
    /// every other HTTP or transport failure to `ServiceUnavailable`; the
    /// `access-token` header is attached only while a token is set.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<reqwest::Response, AppError> {
        let url = format!("{}{}", self.base_url, path);

        if self.verbose {
            eprintln!("{} {}", method, url);
        }

        let mut request = self.client.request(method, &url);
        if let Some(token) = &self.access_token {
            request = request.header("access-token", token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::ServiceUnavailable(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(AppError::Auth);
        }
        if !status.is_success() {
            return Err(AppError::ServiceUnavailable(status.to_string()));
        }

        Ok(response)
    }

    /// Issue a request, refreshing the access token first when it is
    /// expired (or has no expiry claim) and a refresh token is held.
    async fn request(
        &mut self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<reqwest::Response, AppError> {
        if !self.is_access_token_valid()? && self.refresh_token.is_some() {
            self.refresh().await?;
        }
        self.send(method, path, body).await
    }

    /// Login with username and password, replacing both tokens on success.
    pub async fn login(&mut self) -> Result<(), AppError> {
        let body = json!({
            "username": self.username,
            "password": self.password,
            "firebaseId": "",
        });
        let response = self.request(Method::POST, PATH_LOGIN, Some(body)).await?;
        let pair: TokenPair = response.json().await?;
        self.access_token = Some(pair.access_token);
        self.refresh_token = Some(pair.refresh_token);
        Ok(())
    }

    /// Logout on the server side. The local token fields are left in place;
    /// upstream behaves the same way, so callers that want a clean slate
    /// drop the Account.
    pub async fn logout(&mut self) -> Result<(), AppError> {
        self.request(Method::POST, PATH_LOGOUT, None).await?;
        Ok(())
    }

    /// Trade the refresh token for a fresh token pair. The current access
    /// token is dropped before the request goes out, so the refresh call
    /// itself is never sent with a stale bearer header.
    pub async fn refresh(&mut self) -> Result<(), AppError> {
        let refresh_token = self
            .refresh_token
            .clone()
            .ok_or(AppError::NotAuthenticated)?;

        self.access_token = None;
        let body = json!({ "refreshToken": refresh_token });
        let response = self.send(Method::POST, PATH_REFRESH, Some(body)).await?;
        let pair: TokenPair = response.json().await?;
        self.access_token = Some(pair.access_token);
        self.refresh_token = Some(pair.refresh_token);
        Ok(())
    }

    /// Fetch the units registered to the account.
    pub async fn get_units(&mut self) -> Result<Vec<Unit>, AppError> {
        let response = self.request(Method::GET, PATH_UNITS, None).await?;
        let units: UnitsResponse = response.json().await?;
        Ok(units.items)
    }
}
