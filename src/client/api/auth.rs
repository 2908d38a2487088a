//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{LoginRequest, RegisterRequest, TokenResponse, UserProfile};
use crate::error::Result;

/// Authentication operations
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a bearer token
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse>;

    /// Create an account. Does not sign in.
    async fn register(&self, request: &RegisterRequest) -> Result<UserProfile>;

    /// Fetch the profile behind an explicit token, bypassing the persisted one
    async fn fetch_profile(&self, token: &str) -> Result<UserProfile>;
}
