//! User profile API trait

use async_trait::async_trait;

use crate::client::models::{FileUpload, UpdateProfileRequest, UserProfile};
use crate::error::Result;

/// Operations on the signed-in user's profile
#[async_trait]
pub trait UserApi: Send + Sync {
    async fn current_user(&self) -> Result<UserProfile>;

    async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<UserProfile>;

    async fn upload_avatar(&self, file: &FileUpload) -> Result<UserProfile>;
}
