//! Listing API trait

use async_trait::async_trait;

use crate::client::models::{
    Category, CreatePostRequest, FileUpload, Post, PostImage, PostPage, PostQuery,
    UpdatePostRequest,
};
use crate::error::Result;

/// Listing operations
#[async_trait]
pub trait PostApi: Send + Sync {
    /// Search listings with filters, sort and pagination
    async fn list_posts(&self, query: &PostQuery) -> Result<PostPage>;

    async fn get_post(&self, post_id: u64) -> Result<Post>;

    async fn create_post(&self, request: &CreatePostRequest) -> Result<Post>;

    async fn update_post(&self, post_id: u64, request: &UpdatePostRequest) -> Result<Post>;

    async fn delete_post(&self, post_id: u64) -> Result<()>;

    /// Attach an image to a listing the caller owns
    async fn upload_post_image(&self, post_id: u64, file: &FileUpload) -> Result<PostImage>;

    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn favorite_post(&self, post_id: u64) -> Result<()>;

    async fn unfavorite_post(&self, post_id: u64) -> Result<()>;

    async fn is_favorited(&self, post_id: u64) -> Result<bool>;

    /// Listings the caller has favorited
    async fn list_favorites(&self) -> Result<Vec<Post>>;
}
