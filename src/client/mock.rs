//! Mock marketplace API client for testing
//!
//! Provides an in-memory implementation of the API traits for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AuthApi, MessageApi, PostApi, ReportApi, TransactionApi, UserApi};
use super::fixtures;
use super::models::{
    Category, CreateMessageRequest, CreatePostRequest, CreateReportRequest,
    CreateTransactionRequest, FileUpload, InboxConversation, LoginRequest, Message, Post,
    PostImage, PostPage, PostQuery, PostStatus, RegisterRequest, Report, TokenResponse,
    Transaction, UpdatePostRequest, UpdateProfileRequest, UserProfile,
};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure state via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockMarketClient::new()
///     .with_posts(vec![fixtures::post(1)])
///     .await;
///
/// let page = mock.list_posts(&PostQuery::default()).await?;
/// assert_eq!(page.total, 1);
/// ```
#[derive(Default)]
pub struct MockMarketClient {
    /// Listings backing list/get/update/delete
    posts: Arc<Mutex<Vec<Post>>>,
    /// Categories to return from list_categories
    categories: Arc<Mutex<Vec<Category>>>,
    /// Ids of favorited listings
    favorites: Arc<Mutex<Vec<u64>>>,
    /// Messages backing conversations
    messages: Arc<Mutex<Vec<Message>>>,
    /// Inbox rows to return from get_inbox
    inbox: Arc<Mutex<Vec<InboxConversation>>>,
    /// Transactions backing confirm/list_pending
    transactions: Arc<Mutex<Vec<Transaction>>>,
    /// Users to return from list_contacted_users
    contacted: Arc<Mutex<Vec<UserProfile>>>,
    /// Signed-in user; `None` makes profile calls fail with 401
    user: Arc<Mutex<Option<UserProfile>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Error returned by every call until cleared
    persistent_error: Arc<Mutex<Option<fn() -> ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub register: usize,
    pub fetch_profile: usize,
    pub list_posts: usize,
    pub get_post: usize,
    pub create_post: usize,
    pub update_post: usize,
    pub delete_post: usize,
    pub upload_post_image: usize,
    pub list_categories: usize,
    pub favorite_post: usize,
    pub unfavorite_post: usize,
    pub is_favorited: usize,
    pub list_favorites: usize,
    pub send_message: usize,
    pub get_conversation: usize,
    pub get_inbox: usize,
    pub mark_conversation_read: usize,
    pub create_transaction: usize,
    pub confirm_transaction: usize,
    pub list_pending_transactions: usize,
    pub list_contacted_users: usize,
    pub current_user: usize,
    pub update_profile: usize,
    pub upload_avatar: usize,
    pub create_report: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.login
            + self.register
            + self.fetch_profile
            + self.list_posts
            + self.get_post
            + self.create_post
            + self.update_post
            + self.delete_post
            + self.upload_post_image
            + self.list_categories
            + self.favorite_post
            + self.unfavorite_post
            + self.is_favorited
            + self.list_favorites
            + self.send_message
            + self.get_conversation
            + self.get_inbox
            + self.mark_conversation_read
            + self.create_transaction
            + self.confirm_transaction
            + self.list_pending_transactions
            + self.list_contacted_users
            + self.current_user
            + self.update_profile
            + self.upload_avatar
            + self.create_report
    }
}

#[allow(dead_code)]
impl MockMarketClient {
    /// Create a new mock client with default (empty) state.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_posts(self, posts: Vec<Post>) -> Self {
        *self.posts.lock().await = posts;
        self
    }

    pub async fn with_categories(self, categories: Vec<Category>) -> Self {
        *self.categories.lock().await = categories;
        self
    }

    pub async fn with_favorites(self, post_ids: Vec<u64>) -> Self {
        *self.favorites.lock().await = post_ids;
        self
    }

    pub async fn with_messages(self, messages: Vec<Message>) -> Self {
        *self.messages.lock().await = messages;
        self
    }

    pub async fn with_inbox(self, inbox: Vec<InboxConversation>) -> Self {
        *self.inbox.lock().await = inbox;
        self
    }

    pub async fn with_transactions(self, transactions: Vec<Transaction>) -> Self {
        *self.transactions.lock().await = transactions;
        self
    }

    pub async fn with_contacted(self, users: Vec<UserProfile>) -> Self {
        *self.contacted.lock().await = users;
        self
    }

    /// Configure the signed-in user.
    pub async fn with_user(self, user: UserProfile) -> Self {
        *self.user.lock().await = Some(user);
        self
    }

    /// Configure an error to return on the next call.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Fail the next call on an already-built mock.
    pub async fn fail_next(&self, error: ApiError) {
        *self.error.lock().await = Some(error);
    }

    /// Make every call fail until [`clear_errors`](Self::clear_errors).
    pub async fn with_persistent_error(self, make: fn() -> ApiError) -> Self {
        *self.persistent_error.lock().await = Some(make);
        self
    }

    pub async fn clear_errors(&self) {
        *self.error.lock().await = None;
        *self.persistent_error.lock().await = None;
    }

    /// Get the current call counts.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Snapshot of the stored listings.
    pub async fn posts(&self) -> Vec<Post> {
        self.posts.lock().await.clone()
    }

    /// Snapshot of the stored messages.
    pub async fn messages(&self) -> Vec<Message> {
        self.messages.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        {
            let mut error = self.error.lock().await;
            if let Some(e) = error.take() {
                return Err(e.into());
            }
        }

        if let Some(make) = *self.persistent_error.lock().await {
            return Err(make().into());
        }

        Ok(())
    }

    async fn count(&self, bump: impl FnOnce(&mut CallCounts)) {
        let mut counts = self.call_count.lock().await;
        bump(&mut counts);
    }

    async fn me(&self) -> Result<UserProfile> {
        self.user
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::Unauthorized("Not authenticated".to_string()).into())
    }

    async fn find_post(&self, post_id: u64) -> Result<Post> {
        self.posts
            .lock()
            .await
            .iter()
            .find(|p| p.id == post_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("Post not found".to_string()).into())
    }
}

// ============================================================================
// AuthApi Implementation
// ============================================================================

#[async_trait]
impl AuthApi for MockMarketClient {
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse> {
        self.check_error().await?;
        self.count(|c| c.login += 1).await;

        Ok(TokenResponse {
            access_token: format!("mock-token-{}", request.email),
            token_type: "bearer".to_string(),
        })
    }

    async fn register(&self, request: &RegisterRequest) -> Result<UserProfile> {
        self.check_error().await?;
        self.count(|c| c.register += 1).await;

        let mut user = fixtures::user(100, &request.username);
        user.email = request.email.clone();
        Ok(user)
    }

    async fn fetch_profile(&self, _token: &str) -> Result<UserProfile> {
        self.check_error().await?;
        self.count(|c| c.fetch_profile += 1).await;
        self.me().await
    }
}

// ============================================================================
// PostApi Implementation
// ============================================================================

#[async_trait]
impl PostApi for MockMarketClient {
    async fn list_posts(&self, query: &PostQuery) -> Result<PostPage> {
        self.check_error().await?;
        self.count(|c| c.list_posts += 1).await;

        let posts = self.posts.lock().await;
        let filtered: Vec<Post> = posts
            .iter()
            .filter(|p| query.post_type.is_none_or(|t| p.post_type == t))
            .filter(|p| query.category_id.is_none_or(|c| c == 0 || p.category_id == c))
            .cloned()
            .collect();

        let total = filtered.len() as u64;
        let skip = query.skip.unwrap_or(0) as usize;
        let limit = query.limit.unwrap_or(10) as usize;
        Ok(PostPage {
            posts: filtered.into_iter().skip(skip).take(limit).collect(),
            total,
        })
    }

    async fn get_post(&self, post_id: u64) -> Result<Post> {
        self.check_error().await?;
        self.count(|c| c.get_post += 1).await;
        self.find_post(post_id).await
    }

    async fn create_post(&self, request: &CreatePostRequest) -> Result<Post> {
        self.check_error().await?;
        self.count(|c| c.create_post += 1).await;

        let owner = self.me().await?;
        let mut posts = self.posts.lock().await;
        let id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;

        let mut post = fixtures::PostBuilder::new(id)
            .title(&request.title)
            .price(request.price)
            .post_type(request.post_type)
            .owner(owner)
            .build();
        post.description = request.description.clone();
        post.category_id = request.category_id;
        post.condition = request.condition;
        post.price_min = request.price_min;

        posts.push(post.clone());
        Ok(post)
    }

    async fn update_post(&self, post_id: u64, request: &UpdatePostRequest) -> Result<Post> {
        self.check_error().await?;
        self.count(|c| c.update_post += 1).await;

        let mut posts = self.posts.lock().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;

        if let Some(title) = &request.title {
            post.title = title.clone();
        }
        if let Some(description) = &request.description {
            post.description = description.clone();
        }
        if let Some(price) = request.price {
            post.price = price;
        }
        if let Some(status) = request.status {
            post.status = status;
        }
        if request.condition.is_some() {
            post.condition = request.condition;
        }
        Ok(post.clone())
    }

    async fn delete_post(&self, post_id: u64) -> Result<()> {
        self.check_error().await?;
        self.count(|c| c.delete_post += 1).await;

        let mut posts = self.posts.lock().await;
        let before = posts.len();
        posts.retain(|p| p.id != post_id);
        if posts.len() == before {
            return Err(ApiError::NotFound("Post not found".to_string()).into());
        }
        Ok(())
    }

    async fn upload_post_image(&self, post_id: u64, file: &FileUpload) -> Result<PostImage> {
        self.check_error().await?;
        self.count(|c| c.upload_post_image += 1).await;

        let mut posts = self.posts.lock().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;

        let image = PostImage {
            id: post.images.len() as u64 + 1,
            image_url: format!("/static/images/{}", file.file_name),
        };
        post.images.push(image.clone());
        Ok(image)
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.check_error().await?;
        self.count(|c| c.list_categories += 1).await;
        Ok(self.categories.lock().await.clone())
    }

    async fn favorite_post(&self, post_id: u64) -> Result<()> {
        self.check_error().await?;
        self.count(|c| c.favorite_post += 1).await;

        let mut favorites = self.favorites.lock().await;
        if favorites.contains(&post_id) {
            return Err(ApiError::Validation("Already favorited".to_string()).into());
        }
        favorites.push(post_id);
        Ok(())
    }

    async fn unfavorite_post(&self, post_id: u64) -> Result<()> {
        self.check_error().await?;
        self.count(|c| c.unfavorite_post += 1).await;

        let mut favorites = self.favorites.lock().await;
        let before = favorites.len();
        favorites.retain(|id| *id != post_id);
        if favorites.len() == before {
            return Err(ApiError::NotFound("Favorite not found".to_string()).into());
        }
        Ok(())
    }

    async fn is_favorited(&self, post_id: u64) -> Result<bool> {
        self.check_error().await?;
        self.count(|c| c.is_favorited += 1).await;
        Ok(self.favorites.lock().await.contains(&post_id))
    }

    async fn list_favorites(&self) -> Result<Vec<Post>> {
        self.check_error().await?;
        self.count(|c| c.list_favorites += 1).await;

        let favorites = self.favorites.lock().await.clone();
        let posts = self.posts.lock().await;
        Ok(posts
            .iter()
            .filter(|p| favorites.contains(&p.id))
            .cloned()
            .collect())
    }
}

// ============================================================================
// MessageApi Implementation
// ============================================================================

#[async_trait]
impl MessageApi for MockMarketClient {
    async fn send_message(&self, request: &CreateMessageRequest) -> Result<Message> {
        self.check_error().await?;
        self.count(|c| c.send_message += 1).await;

        let me = self.me().await?;
        let receiver = fixtures::user(request.receiver_id, "receiver");
        let mut messages = self.messages.lock().await;

        let mut message = fixtures::message(
            messages.len() as u64 + 1,
            request.post_id,
            &me,
            &receiver,
            false,
        );
        message.content = request.content.clone();
        messages.push(message.clone());
        Ok(message)
    }

    async fn get_conversation(&self, post_id: u64, other_user_id: u64) -> Result<Vec<Message>> {
        self.check_error().await?;
        self.count(|c| c.get_conversation += 1).await;

        let me = self.me().await?;
        let messages = self.messages.lock().await;
        Ok(messages
            .iter()
            .filter(|m| m.post_id == post_id)
            .filter(|m| {
                (m.sender_id == me.id && m.receiver_id == other_user_id)
                    || (m.sender_id == other_user_id && m.receiver_id == me.id)
            })
            .cloned()
            .collect())
    }

    async fn get_inbox(&self) -> Result<Vec<InboxConversation>> {
        self.check_error().await?;
        self.count(|c| c.get_inbox += 1).await;
        Ok(self.inbox.lock().await.clone())
    }

    async fn mark_conversation_read(&self, post_id: u64, other_user_id: u64) -> Result<u32> {
        self.check_error().await?;
        self.count(|c| c.mark_conversation_read += 1).await;

        let me = self.me().await?;
        let mut messages = self.messages.lock().await;
        let mut updated = 0;
        for message in messages.iter_mut().filter(|m| {
            m.post_id == post_id
                && m.sender_id == other_user_id
                && m.receiver_id == me.id
                && !m.is_read
        }) {
            message.is_read = true;
            updated += 1;
        }
        Ok(updated)
    }
}

// ============================================================================
// TransactionApi Implementation
// ============================================================================

#[async_trait]
impl TransactionApi for MockMarketClient {
    async fn create_transaction(&self, request: &CreateTransactionRequest) -> Result<Transaction> {
        self.check_error().await?;
        self.count(|c| c.create_transaction += 1).await;

        let seller = self.me().await?;
        {
            let mut posts = self.posts.lock().await;
            let post = posts
                .iter_mut()
                .find(|p| p.id == request.post_id)
                .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;
            if post.owner.id != seller.id {
                return Err(ApiError::Forbidden("Not your post".to_string()).into());
            }
            post.status = PostStatus::Sold;
        }

        let buyer = fixtures::user(request.buyer_id, "buyer");
        let mut transactions = self.transactions.lock().await;
        let transaction = fixtures::transaction(
            transactions.len() as u64 + 1,
            request.post_id,
            &seller,
            &buyer,
        );
        transactions.push(transaction.clone());
        Ok(transaction)
    }

    async fn confirm_transaction(&self, transaction_id: u64) -> Result<Transaction> {
        self.check_error().await?;
        self.count(|c| c.confirm_transaction += 1).await;

        let me = self.me().await?;
        let mut transactions = self.transactions.lock().await;
        let transaction = transactions
            .iter_mut()
            .find(|t| t.id == transaction_id)
            .ok_or_else(|| ApiError::NotFound("Transaction not found".to_string()))?;

        if me.id == transaction.seller_id {
            transaction.seller_confirmed = true;
        } else if me.id == transaction.buyer_id {
            transaction.buyer_confirmed = true;
        } else {
            return Err(ApiError::Forbidden("Not a party to this transaction".to_string()).into());
        }
        transaction.completed = transaction.seller_confirmed && transaction.buyer_confirmed;
        Ok(transaction.clone())
    }

    async fn list_pending_transactions(&self) -> Result<Vec<Transaction>> {
        self.check_error().await?;
        self.count(|c| c.list_pending_transactions += 1).await;

        let me = self.me().await?;
        let transactions = self.transactions.lock().await;
        Ok(transactions
            .iter()
            .filter(|t| !t.completed && t.awaits_confirmation_from(me.id))
            .cloned()
            .collect())
    }

    async fn list_contacted_users(&self, _post_id: u64) -> Result<Vec<UserProfile>> {
        self.check_error().await?;
        self.count(|c| c.list_contacted_users += 1).await;
        Ok(self.contacted.lock().await.clone())
    }
}

// ============================================================================
// UserApi Implementation
// ============================================================================

#[async_trait]
impl UserApi for MockMarketClient {
    async fn current_user(&self) -> Result<UserProfile> {
        self.check_error().await?;
        self.count(|c| c.current_user += 1).await;
        self.me().await
    }

    async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<UserProfile> {
        self.check_error().await?;
        self.count(|c| c.update_profile += 1).await;

        let mut user = self.user.lock().await;
        let profile = user
            .as_mut()
            .ok_or_else(|| ApiError::Unauthorized("Not authenticated".to_string()))?;
        if let Some(username) = &request.username {
            profile.username = username.clone();
        }
        Ok(profile.clone())
    }

    async fn upload_avatar(&self, file: &FileUpload) -> Result<UserProfile> {
        self.check_error().await?;
        self.count(|c| c.upload_avatar += 1).await;

        let mut user = self.user.lock().await;
        let profile = user
            .as_mut()
            .ok_or_else(|| ApiError::Unauthorized("Not authenticated".to_string()))?;
        profile.avatar_url = Some(format!("/static/avatars/{}", file.file_name));
        Ok(profile.clone())
    }
}

// ============================================================================
// ReportApi Implementation
// ============================================================================

#[async_trait]
impl ReportApi for MockMarketClient {
    async fn create_report(&self, request: &CreateReportRequest) -> Result<Report> {
        self.check_error().await?;
        self.count(|c| c.create_report += 1).await;

        let me = self.me().await?;
        let mut report = fixtures::report(1, me.id, request.reported_user_id, &request.reason);
        report.description = request.description.clone();
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockMarketClient::new();

        let page = mock.list_posts(&PostQuery::default()).await.unwrap();
        assert!(page.posts.is_empty());
        assert_eq!(page.total, 0);

        assert!(mock.list_categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mock_client_with_error() {
        let mock = MockMarketClient::new()
            .with_error(ApiError::Timeout)
            .await;

        assert!(mock.list_categories().await.is_err());

        // Error is consumed, next call succeeds
        assert!(mock.list_categories().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_persistent_error() {
        let mock = MockMarketClient::new()
            .with_persistent_error(|| ApiError::ServerError("down".to_string()))
            .await;

        assert!(mock.get_inbox().await.is_err());
        assert!(mock.get_inbox().await.is_err());

        mock.clear_errors().await;
        assert!(mock.get_inbox().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_call_counts() {
        let mock = MockMarketClient::new().with_posts(vec![fixtures::post(1)]).await;

        mock.get_post(1).await.unwrap();
        mock.get_post(1).await.unwrap();
        mock.list_categories().await.unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.get_post, 2);
        assert_eq!(counts.list_categories, 1);
        assert_eq!(counts.total(), 3);
    }

    #[tokio::test]
    async fn test_mock_list_posts_paginates() {
        let posts = (1..=5).map(fixtures::post).collect();
        let mock = MockMarketClient::new().with_posts(posts).await;

        let page = mock
            .list_posts(&PostQuery::new().skip(2).limit(2))
            .await
            .unwrap();

        assert_eq!(page.total, 5);
        assert_eq!(page.posts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3, 4]);
    }

    #[tokio::test]
    async fn test_mock_transaction_confirmation() {
        let seller = fixtures::user(1, "seller");
        let buyer = fixtures::user(2, "buyer");
        let mock = MockMarketClient::new()
            .with_user(seller.clone())
            .await
            .with_posts(vec![fixtures::PostBuilder::new(9).owner(seller).build()])
            .await;

        let tx = mock
            .create_transaction(&CreateTransactionRequest {
                post_id: 9,
                buyer_id: buyer.id,
            })
            .await
            .unwrap();
        assert_eq!(mock.get_post(9).await.unwrap().status, PostStatus::Sold);

        let tx = mock.confirm_transaction(tx.id).await.unwrap();
        assert!(tx.seller_confirmed);
        assert!(!tx.completed);
    }

    #[tokio::test]
    async fn test_mock_mark_read_counts_incoming_only() {
        let me = fixtures::user(1, "me");
        let other = fixtures::user(2, "other");
        let mock = MockMarketClient::new()
            .with_user(me.clone())
            .await
            .with_messages(vec![
                fixtures::message(1, 5, &other, &me, false),
                fixtures::message(2, 5, &other, &me, false),
                fixtures::message(3, 5, &me, &other, false),
            ])
            .await;

        assert_eq!(mock.mark_conversation_read(5, 2).await.unwrap(), 2);
        assert_eq!(mock.mark_conversation_read(5, 2).await.unwrap(), 0);
    }
}
