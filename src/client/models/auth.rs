//! Authentication models

use serde::{Deserialize, Serialize};

use super::{invalid, require_text};
use crate::error::Result;

/// Response of the password-grant token endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,

    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Credentials for `/api/token`, sent form-encoded
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<()> {
        require_text("email", &self.email)?;
        require_text("password", &self.password)
    }

    /// Password-grant form fields. The backend reads the email from `username`.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        vec![
            ("username".to_string(), self.email.clone()),
            ("password".to_string(), self.password.clone()),
        ]
    }
}

/// New account
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<()> {
        require_text("email", &self.email)?;
        if !self.email.contains('@') {
            return invalid("email must be an email address");
        }
        require_text("username", &self.username)?;
        require_text("password", &self.password)
    }
}
