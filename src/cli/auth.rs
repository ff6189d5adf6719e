use chrono::{DateTime, Utc};
use dialoguer::{Input, Password};
use serde_json::json;

use crate::api::account::Account;
use crate::api::jwt;
use crate::auth::credentials::credentials_from_env;
use crate::auth::keychain;
use crate::auth::token::TokenSet;
use crate::cli::output::print_json;
use crate::config::RuntimeConfig;
use crate::error::AppError;

pub async fn handle_login(config: &RuntimeConfig) -> Result<(), AppError> {
    let (username, password) = match credentials_from_env() {
        Some((u, p)) => (u, p),
        None => {
            let username: String = Input::new()
                .with_prompt("Aseko email")
                .interact_text()
                .map_err(|e| AppError::InvalidInput(e.to_string()))?;
            let password: String = Password::new()
                .with_prompt("Password")
                .interact()
                .map_err(|e| AppError::InvalidInput(e.to_string()))?;
            (username, password)
        }
    };

    let mut account = Account::new(None, config.verbose)?.with_credentials(&username, &password);
    account.login().await?;

    let access_token = account
        .access_token()
        .ok_or_else(|| AppError::ServiceUnavailable("login returned no access token".into()))?
        .to_string();

    keychain::store_tokens(&TokenSet {
        access_token,
        refresh_token: account.refresh_token().map(|t| t.to_string()),
        username: username.clone(),
    })?;

    print_json(&json!({
        "status": "authenticated",
        "username": username,
    }));

    Ok(())
}

pub async fn handle_logout(config: &RuntimeConfig) -> Result<(), AppError> {
    // Best-effort server-side logout; stored tokens are cleared either way.
    if let Some(tokens) = keychain::get_tokens()? {
        let mut account = Account::new(None, config.verbose)?
            .with_tokens(Some(tokens.access_token), tokens.refresh_token);
        if let Err(e) = account.logout().await {
            if config.verbose {
                eprintln!("Server logout failed (non-fatal): {}", e);
            }
        }
    }

    keychain::clear_tokens()?;
    print_json(&json!({"status": "logged_out"}));
    Ok(())
}

pub async fn handle_status(_config: &RuntimeConfig) -> Result<(), AppError> {
    match keychain::get_tokens()? {
        Some(tokens) => {
            let expiry = jwt::decode_unverified(&tokens.access_token)
                .ok()
                .and_then(|claims| claims.exp)
                .and_then(|exp| DateTime::<Utc>::from_timestamp(exp, 0));

            print_json(&json!({
                "status": "authenticated",
                "username": tokens.username,
                "has_refresh_token": tokens.refresh_token.is_some(),
                "access_token_expires": expiry.map(|t| t.to_rfc3339()),
                "access_token_expired": expiry.map(|t| t <= Utc::now()).unwrap_or(true),
            }));
        }
        None => {
            print_json(&json!({
                "status": "not_authenticated",
            }));
        }
    }
    Ok(())
}
