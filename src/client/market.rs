//! Marketplace API client implementation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api::{AuthApi, MessageApi, PostApi, ReportApi, TransactionApi, UserApi};
use super::models::{
    Category, CreateMessageRequest, CreatePostRequest, CreateReportRequest,
    CreateTransactionRequest, FavoriteStatus, FileUpload, InboxConversation, LoginRequest,
    MarkReadResponse, Message, Post, PostImage, PostPage, PostQuery, RegisterRequest, Report,
    TokenResponse, Transaction, UpdatePostRequest, UpdateProfileRequest, UserProfile,
};
use super::retry::RetryPolicy;
use crate::error::{ApiError, Result};
use crate::nav::{self, Navigator, routes};
use crate::session::SessionManager;

/// Request payload, rebuilt for every attempt
enum Body {
    Empty,
    Json(serde_json::Value),
    Form(Vec<(String, String)>),
    File(FileUpload),
}

impl Body {
    fn json<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Body::Json(serde_json::to_value(value)?))
    }
}

/// Which credential to attach
enum Auth<'a> {
    None,
    Stored,
    Explicit(&'a str),
}

/// Marketplace API client
pub struct MarketClient {
    http: HttpClient,
    base_url: String,
    session: Arc<SessionManager>,
    navigator: Arc<dyn Navigator>,
    retry: RetryPolicy,
}

impl MarketClient {
    /// Create a client for `base_url` (no trailing slash)
    pub fn new(
        base_url: &str,
        timeout: Duration,
        session: Arc<SessionManager>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = HttpClient::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            navigator,
            retry: RetryPolicy::default(),
        })
    }

    /// Replace the retry policy
    #[cfg(test)]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build(
        &self,
        method: Method,
        url: &str,
        query: &[(&str, String)],
        body: &Body,
        token: Option<&str>,
    ) -> std::result::Result<RequestBuilder, ApiError> {
        let mut request = self.http.request(method, url);

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        request = match body {
            Body::Empty => request,
            Body::Json(value) => request.json(value),
            Body::Form(fields) => request.form(fields),
            Body::File(file) => {
                let part = Part::bytes(file.bytes.clone())
                    .file_name(file.file_name.clone())
                    .mime_str(&file.mime)
                    .map_err(|e| ApiError::Validation(e.to_string()))?;
                request.multipart(Form::new().part("file", part))
            }
        };

        Ok(request)
    }

    /// Send with retries and map error statuses
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Body,
        auth: Auth<'_>,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        let token = match auth {
            Auth::None => None,
            Auth::Stored => self.session.stored_token(),
            Auth::Explicit(token) => Some(token.to_string()),
        };

        debug!("{} {}", method, path);
        let response = self
            .retry
            .run(|_| {
                let request = self.build(method.clone(), &url, query, &body, token.as_deref());
                async move { request?.send().await.map_err(ApiError::from) }
            })
            .await?;

        self.check_status(response).await
    }

    async fn check_status(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = error_detail(&body, status);

        let err = match status {
            StatusCode::UNAUTHORIZED => {
                self.handle_unauthorized().await;
                ApiError::Unauthorized(detail)
            }
            StatusCode::FORBIDDEN => ApiError::Forbidden(detail),
            StatusCode::NOT_FOUND => ApiError::NotFound(detail),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::Validation(detail)
            }
            status if status.is_server_error() => ApiError::ServerError(detail),
            status => ApiError::UnexpectedStatus {
                status: status.as_u16(),
                detail,
            },
        };
        Err(err.into())
    }

    /// Drop the credential and send the user to login, unless they are already
    /// on an authentication route
    async fn handle_unauthorized(&self) {
        let route = self.navigator.current_route();
        if nav::is_auth_route(&route) {
            debug!("401 on {}, not redirecting", route);
            return;
        }

        warn!("Credential rejected while on {}, signing out", route);
        self.session.expire().await;
        self.navigator.navigate(routes::LOGIN);
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Body,
        auth: Auth<'_>,
    ) -> Result<T> {
        let response = self.send(method, path, query, body, auth).await?;
        let data = response.json::<T>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;
        Ok(data)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::GET, path, &[], Body::Empty, Auth::Stored)
            .await
    }

    /// Request whose success carries no body we care about
    async fn request_empty(&self, method: Method, path: &str, body: Body) -> Result<()> {
        self.send(method, path, &[], body, Auth::Stored).await?;
        Ok(())
    }
}

/// Human-readable reason from an error body.
///
/// Understands `{"detail": "..."}` and `{"detail": [{"msg": "..."}, ...]}`.
fn error_detail(body: &str, status: StatusCode) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let detail = parsed.as_ref().and_then(|v| v.get("detail"));

    match detail {
        Some(serde_json::Value::String(text)) if !text.is_empty() => text.clone(),
        Some(serde_json::Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if messages.is_empty() {
                fallback_detail(status)
            } else {
                messages.join("; ")
            }
        }
        _ => fallback_detail(status),
    }
}

fn fallback_detail(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("Request failed: {} {}", status.as_u16(), reason),
        None => format!("Request failed with status {}", status.as_u16()),
    }
}

#[async_trait]
impl AuthApi for MarketClient {
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse> {
        self.request(
            Method::POST,
            "/api/token",
            &[],
            Body::Form(request.form_fields()),
            Auth::None,
        )
        .await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<UserProfile> {
        self.request(
            Method::POST,
            "/api/users/register",
            &[],
            Body::json(request)?,
            Auth::None,
        )
        .await
    }

    async fn fetch_profile(&self, token: &str) -> Result<UserProfile> {
        self.request(
            Method::GET,
            "/api/users/me",
            &[],
            Body::Empty,
            Auth::Explicit(token),
        )
        .await
    }
}

#[async_trait]
impl PostApi for MarketClient {
    async fn list_posts(&self, query: &PostQuery) -> Result<PostPage> {
        self.request(
            Method::GET,
            "/api/posts",
            &query.to_query_params(),
            Body::Empty,
            Auth::Stored,
        )
        .await
    }

    async fn get_post(&self, post_id: u64) -> Result<Post> {
        self.get(&format!("/api/posts/{}", post_id)).await
    }

    async fn create_post(&self, request: &CreatePostRequest) -> Result<Post> {
        self.request(
            Method::POST,
            "/api/posts",
            &[],
            Body::json(request)?,
            Auth::Stored,
        )
        .await
    }

    async fn update_post(&self, post_id: u64, request: &UpdatePostRequest) -> Result<Post> {
        self.request(
            Method::PATCH,
            &format!("/api/posts/{}", post_id),
            &[],
            Body::json(request)?,
            Auth::Stored,
        )
        .await
    }

    async fn delete_post(&self, post_id: u64) -> Result<()> {
        self.request_empty(Method::DELETE, &format!("/api/posts/{}", post_id), Body::Empty)
            .await
    }

    async fn upload_post_image(&self, post_id: u64, file: &FileUpload) -> Result<PostImage> {
        self.request(
            Method::POST,
            &format!("/api/posts/{}/images", post_id),
            &[],
            Body::File(file.clone()),
            Auth::Stored,
        )
        .await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.get("/api/categories").await
    }

    async fn favorite_post(&self, post_id: u64) -> Result<()> {
        self.request_empty(
            Method::POST,
            &format!("/api/posts/{}/favorite", post_id),
            Body::Empty,
        )
        .await
    }

    async fn unfavorite_post(&self, post_id: u64) -> Result<()> {
        self.request_empty(
            Method::DELETE,
            &format!("/api/posts/{}/favorite", post_id),
            Body::Empty,
        )
        .await
    }

    async fn is_favorited(&self, post_id: u64) -> Result<bool> {
        let status: FavoriteStatus = self
            .get(&format!("/api/posts/{}/favorite", post_id))
            .await?;
        Ok(status.is_favorited)
    }

    async fn list_favorites(&self) -> Result<Vec<Post>> {
        self.get("/api/users/me/favorites").await
    }
}

#[async_trait]
impl MessageApi for MarketClient {
    async fn send_message(&self, request: &CreateMessageRequest) -> Result<Message> {
        self.request(
            Method::POST,
            "/api/messages",
            &[],
            Body::json(request)?,
            Auth::Stored,
        )
        .await
    }

    async fn get_conversation(&self, post_id: u64, other_user_id: u64) -> Result<Vec<Message>> {
        self.request(
            Method::GET,
            "/api/conversations",
            &conversation_params(post_id, other_user_id),
            Body::Empty,
            Auth::Stored,
        )
        .await
    }

    async fn get_inbox(&self) -> Result<Vec<InboxConversation>> {
        self.get("/api/users/me/inbox").await
    }

    async fn mark_conversation_read(&self, post_id: u64, other_user_id: u64) -> Result<u32> {
        let response: MarkReadResponse = self
            .request(
                Method::PATCH,
                "/api/conversations/mark-read",
                &conversation_params(post_id, other_user_id),
                Body::Empty,
                Auth::Stored,
            )
            .await?;
        Ok(response.updated_count)
    }
}

fn conversation_params(post_id: u64, other_user_id: u64) -> [(&'static str, String); 2] {
    [
        ("post_id", post_id.to_string()),
        ("other_user_id", other_user_id.to_string()),
    ]
}

#[async_trait]
impl TransactionApi for MarketClient {
    async fn create_transaction(&self, request: &CreateTransactionRequest) -> Result<Transaction> {
        self.request(
            Method::POST,
            "/api/transactions",
            &[],
            Body::json(request)?,
            Auth::Stored,
        )
        .await
    }

    async fn confirm_transaction(&self, transaction_id: u64) -> Result<Transaction> {
        self.request(
            Method::PATCH,
            &format!("/api/transactions/{}/confirm", transaction_id),
            &[],
            Body::Empty,
            Auth::Stored,
        )
        .await
    }

    async fn list_pending_transactions(&self) -> Result<Vec<Transaction>> {
        self.get("/api/transactions/my-pending").await
    }

    async fn list_contacted_users(&self, post_id: u64) -> Result<Vec<UserProfile>> {
        self.get(&format!("/api/posts/{}/contacted-users", post_id))
            .await
    }
}

#[async_trait]
impl UserApi for MarketClient {
    async fn current_user(&self) -> Result<UserProfile> {
        self.get("/api/users/me").await
    }

    async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<UserProfile> {
        self.request(
            Method::PATCH,
            "/api/users/me",
            &[],
            Body::json(request)?,
            Auth::Stored,
        )
        .await
    }

    async fn upload_avatar(&self, file: &FileUpload) -> Result<UserProfile> {
        self.request(
            Method::POST,
            "/api/users/me/avatar",
            &[],
            Body::File(file.clone()),
            Auth::Stored,
        )
        .await
    }
}

#[async_trait]
impl ReportApi for MarketClient {
    async fn create_report(&self, request: &CreateReportRequest) -> Result<Report> {
        self.request(
            Method::POST,
            "/api/reports",
            &[],
            Body::json(request)?,
            Auth::Stored,
        )
        .await
    }
}
