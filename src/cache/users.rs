//! Account facade: authentication and the signed-in user's profile
//!
//! Credentials and profiles are never cached.

use async_trait::async_trait;

use super::{CacheKeys, CachedMarketClient};
use crate::client::MarketApi;
use crate::client::api::{AuthApi, UserApi};
use crate::client::models::{
    FileUpload, LoginRequest, RegisterRequest, TokenResponse, UpdateProfileRequest, UserProfile,
};
use crate::error::Result;

impl<C: MarketApi> CachedMarketClient<C> {
    /// Listings and favorites embed owner snapshots
    fn invalidate_owner_snapshots(&self) {
        self.invalidate_prefix(CacheKeys::POSTS_PREFIX);
        self.invalidate(&CacheKeys::favorites());
    }
}

#[async_trait]
impl<C: MarketApi + 'static> AuthApi for CachedMarketClient<C> {
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse> {
        request.validate()?;
        self.inner.login(request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<UserProfile> {
        request.validate()?;
        self.inner.register(request).await
    }

    async fn fetch_profile(&self, token: &str) -> Result<UserProfile> {
        self.inner.fetch_profile(token).await
    }
}

#[async_trait]
impl<C: MarketApi + 'static> UserApi for CachedMarketClient<C> {
    async fn current_user(&self) -> Result<UserProfile> {
        self.inner.current_user().await
    }

    async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<UserProfile> {
        request.validate()?;
        let user = self.inner.update_profile(request).await?;
        self.invalidate_owner_snapshots();
        Ok(user)
    }

    async fn upload_avatar(&self, file: &FileUpload) -> Result<UserProfile> {
        file.validate()?;
        let user = self.inner.upload_avatar(file).await?;
        self.invalidate_owner_snapshots();
        Ok(user)
    }
}
