//! Listing facade: cached reads, validated writes, scoped invalidation

use async_trait::async_trait;

use super::{CacheKeys, CacheTtl, CachedMarketClient};
use crate::client::MarketApi;
use crate::client::api::PostApi;
use crate::client::models::{
    Category, CreatePostRequest, FileUpload, Post, PostImage, PostPage, PostQuery,
    UpdatePostRequest, UserProfile, require_id,
};
use crate::error::{ApiError, Result};

/// How many of the newest listings are scanned for one owner's posts. The
/// backend has no per-owner listing endpoint.
pub const OWNER_SCAN_LIMIT: u32 = 100;

impl<C: MarketApi> CachedMarketClient<C> {
    /// A listing changed: its detail and every listing page may be stale
    pub(super) fn invalidate_post(&self, post_id: u64) {
        self.invalidate(&CacheKeys::post_detail(post_id));
        self.invalidate_prefix(CacheKeys::POSTS_PREFIX);
    }
}

impl<C: MarketApi + 'static> CachedMarketClient<C> {
    /// Listings owned by `owner_id` among the newest [`OWNER_SCAN_LIMIT`]
    pub async fn posts_by_owner(&self, owner_id: u64) -> Result<Vec<Post>> {
        let query = PostQuery::new().skip(0).limit(OWNER_SCAN_LIMIT);
        let page = self.list_posts(&query).await?;
        Ok(page
            .posts
            .into_iter()
            .filter(|post| post.owner.id == owner_id)
            .collect())
    }

    /// Another user's public profile and listings.
    ///
    /// There is no public user endpoint, so the profile is the owner embedded
    /// in their newest listing. A user without listings is reported as not
    /// found.
    pub async fn user_listings(&self, user_id: u64) -> Result<(UserProfile, Vec<Post>)> {
        require_id("user_id", user_id)?;
        let posts = self.posts_by_owner(user_id).await?;
        match posts.first() {
            Some(post) => Ok((post.owner.clone(), posts)),
            None => Err(ApiError::NotFound(format!("User #{} not found", user_id)).into()),
        }
    }
}

#[async_trait]
impl<C: MarketApi + 'static> PostApi for CachedMarketClient<C> {
    async fn list_posts(&self, query: &PostQuery) -> Result<PostPage> {
        let key = CacheKeys::posts(query);
        self.read_through(&key, CacheTtl::POST_LIST, || self.inner.list_posts(query))
            .await
    }

    async fn get_post(&self, post_id: u64) -> Result<Post> {
        require_id("post_id", post_id)?;
        let key = CacheKeys::post_detail(post_id);
        self.read_through(&key, CacheTtl::POST_DETAIL, || self.inner.get_post(post_id))
            .await
    }

    async fn create_post(&self, request: &CreatePostRequest) -> Result<Post> {
        request.validate()?;
        let post = self.inner.create_post(request).await?;
        self.invalidate_prefix(CacheKeys::POSTS_PREFIX);
        Ok(post)
    }

    async fn update_post(&self, post_id: u64, request: &UpdatePostRequest) -> Result<Post> {
        require_id("post_id", post_id)?;
        request.validate()?;
        let post = self.inner.update_post(post_id, request).await?;
        self.invalidate_post(post_id);
        Ok(post)
    }

    async fn delete_post(&self, post_id: u64) -> Result<()> {
        require_id("post_id", post_id)?;
        self.inner.delete_post(post_id).await?;
        self.invalidate_post(post_id);
        Ok(())
    }

    async fn upload_post_image(&self, post_id: u64, file: &FileUpload) -> Result<PostImage> {
        require_id("post_id", post_id)?;
        file.validate()?;
        let image = self.inner.upload_post_image(post_id, file).await?;
        self.invalidate_post(post_id);
        Ok(image)
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.read_through(&CacheKeys::categories(), CacheTtl::CATEGORIES, || {
            self.inner.list_categories()
        })
        .await
    }

    async fn favorite_post(&self, post_id: u64) -> Result<()> {
        require_id("post_id", post_id)?;
        self.inner.favorite_post(post_id).await?;
        self.invalidate(&CacheKeys::favorites());
        self.invalidate(&CacheKeys::post_detail(post_id));
        Ok(())
    }

    async fn unfavorite_post(&self, post_id: u64) -> Result<()> {
        require_id("post_id", post_id)?;
        self.inner.unfavorite_post(post_id).await?;
        self.invalidate(&CacheKeys::favorites());
        self.invalidate(&CacheKeys::post_detail(post_id));
        Ok(())
    }

    /// Never cached
    async fn is_favorited(&self, post_id: u64) -> Result<bool> {
        require_id("post_id", post_id)?;
        self.inner.is_favorited(post_id).await
    }

    async fn list_favorites(&self) -> Result<Vec<Post>> {
        self.read_through(&CacheKeys::favorites(), CacheTtl::FAVORITES, || {
            self.inner.list_favorites()
        })
        .await
    }
}
