use keyring::Entry;

use crate::auth::token::TokenSet;
use crate::error::AppError;

const SERVICE: &str = "aseko";

fn entry(key: &str) -> Result<Entry, AppError> {
    Entry::new(SERVICE, key).map_err(|e| AppError::Keychain(e.to_string()))
}

fn get_value(key: &str) -> Result<Option<String>, AppError> {
    let entry = entry(key)?;
    match entry.get_password() {
        Ok(val) => Ok(Some(val)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(AppError::Keychain(e.to_string())),
    }
}

fn set_value(key: &str, value: &str) -> Result<(), AppError> {
    let entry = entry(key)?;
    entry
        .set_password(value)
        .map_err(|e| AppError::Keychain(e.to_string()))
}

fn delete_value(key: &str) -> Result<(), AppError> {
    let entry = entry(key)?;
    match entry.delete_credential() {
        Ok(()) => Ok(()),
        Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => Err(AppError::Keychain(e.to_string())),
    }
}

pub fn store_tokens(tokens: &TokenSet) -> Result<(), AppError> {
    set_value("access_token", &tokens.access_token)?;
    if let Some(ref rt) = tokens.refresh_token {
        set_value("refresh_token", rt)?;
    }
    set_value("username", &tokens.username)?;
    Ok(())
}

pub fn get_tokens() -> Result<Option<TokenSet>, AppError> {
    let access_token = match get_value("access_token")? {
        Some(t) => t,
        None => return Ok(None),
    };
    let refresh_token = get_value("refresh_token")?;
    let username = get_value("username")?.unwrap_or_default();

    Ok(Some(TokenSet {
        access_token,
        refresh_token,
        username,
    }))
}

pub fn clear_tokens() -> Result<(), AppError> {
    delete_value("access_token")?;
    delete_value("refresh_token")?;
    delete_value("username")?;
    Ok(())
}
