use std::env;

use crate::api::account::Account;
use crate::auth::keychain;
use crate::auth::token::TokenSet;
use crate::error::AppError;

/// Build an Account from the stored token set.
pub fn stored_account(verbose: bool) -> Result<(Account, TokenSet), AppError> {
    let tokens = keychain::get_tokens()?.ok_or(AppError::NotAuthenticated)?;

    if tokens.access_token.is_empty() {
        return Err(AppError::NotAuthenticated);
    }

    let account = Account::new(None, verbose)?.with_tokens(
        Some(tokens.access_token.clone()),
        tokens.refresh_token.clone(),
    );
    Ok((account, tokens))
}

/// Write the account's current tokens back to the keychain. Called after
/// API operations, which may have rotated the pair.
pub fn persist_tokens(account: &Account, username: &str) -> Result<(), AppError> {
    let access_token = match account.access_token() {
        Some(t) => t.to_string(),
        None => return Ok(()),
    };
    keychain::store_tokens(&TokenSet {
        access_token,
        refresh_token: account.refresh_token().map(|t| t.to_string()),
        username: username.to_string(),
    })
}

/// Get credentials from env vars for login, or None if not set.
pub fn credentials_from_env() -> Option<(String, String)> {
    let username = env::var("ASEKO_USERNAME").ok()?;
    let password = env::var("ASEKO_PASSWORD").ok()?;
    if username.is_empty() || password.is_empty() {
        return None;
    }
    Some((username, password))
}
