#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication failed: credentials or tokens were rejected")]
    Auth,

    #[error("Aseko Pool Live API unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Failed to decode access token: {0}")]
    TokenDecode(#[from] jsonwebtoken::errors::Error),

    #[error("Unit not found: {0}")]
    UnitNotFound(String),

    #[error("Not authenticated. Run 'aseko login' first.")]
    NotAuthenticated,

    #[error("Keychain error: {0}")]
    Keychain(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Auth | AppError::TokenDecode(_) | AppError::NotAuthenticated => 2,
            AppError::UnitNotFound(_) => 3,
            _ => 1,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Auth => "auth",
            AppError::ServiceUnavailable(_) => "service_unavailable",
            AppError::TokenDecode(_) => "token_decode",
            AppError::UnitNotFound(_) => "unit_not_found",
            AppError::NotAuthenticated => "not_authenticated",
            AppError::Keychain(_) => "keychain",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Http(_) => "http",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.error_type(),
            "message": self.to_string(),
        })
    }
}
