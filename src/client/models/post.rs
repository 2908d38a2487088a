//! Listing models

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{invalid, require_id, require_text, timestamp, UserProfile};
use crate::error::Result;

/// What the poster wants to do with the item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    Sell,
    Buy,
    Free,
}

impl PostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Sell => "sell",
            PostType::Buy => "buy",
            PostType::Free => "free",
        }
    }
}

/// Item wear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    New,
    #[value(name = "like_new")]
    LikeNew,
    Good,
    Fair,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::LikeNew => "like_new",
            Condition::Good => "good",
            Condition::Fair => "fair",
        }
    }
}

/// Listing lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    Available,
    Sold,
    Hidden,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Available => "available",
            PostStatus::Sold => "sold",
            PostStatus::Hidden => "hidden",
        }
    }
}

/// Listing sort order understood by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Latest,
    #[value(name = "price_asc")]
    PriceAsc,
    #[value(name = "price_desc")]
    PriceDesc,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Latest => "latest",
            SortBy::PriceAsc => "price_asc",
            SortBy::PriceDesc => "price_desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostImage {
    pub id: u64,
    /// Server-relative path such as `/static/images/<uuid>.jpg`
    pub image_url: String,
}

/// A listing with its owner, category and images
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,

    /// Lower bound of the acceptable price for `buy` listings
    #[serde(default)]
    pub price_min: Option<f64>,

    pub post_type: PostType,

    #[serde(default)]
    pub condition: Option<Condition>,

    pub status: PostStatus,
    pub category_id: u64,

    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,

    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,

    pub owner: UserProfile,
    pub category: Category,

    #[serde(default)]
    pub images: Vec<PostImage>,
}

/// One page of listings plus the total across all pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub total: u64,
}

/// Whether the current user has favorited a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FavoriteStatus {
    pub is_favorited: bool,
}

/// Filters, sort and pagination for the listing query.
///
/// # Example
/// ```ignore
/// let query = PostQuery::new()
///     .post_type(PostType::Sell)
///     .sort_by(SortBy::PriceAsc)
///     .limit(20);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostQuery {
    pub post_type: Option<PostType>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub keyword: Option<String>,
    pub category_id: Option<u64>,
    pub sort_by: Option<SortBy>,
}

impl PostQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post_type(mut self, post_type: PostType) -> Self {
        self.post_type = Some(post_type);
        self
    }

    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn category(mut self, category_id: u64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    /// Query string parameters using backend names.
    ///
    /// Unset fields are omitted, as are a blank keyword and a zero category id,
    /// which the backend treats the same as "no filter".
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(post_type) = self.post_type {
            params.push(("post_type", post_type.as_str().to_string()));
        }
        if let Some(skip) = self.skip {
            params.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(keyword) = self.keyword.as_deref().map(str::trim)
            && !keyword.is_empty()
        {
            params.push(("keyword", keyword.to_string()));
        }
        if let Some(category_id) = self.category_id
            && category_id != 0
        {
            params.push(("category_id", category_id.to_string()));
        }
        if let Some(sort_by) = self.sort_by {
            params.push(("sort_by", sort_by.as_str().to_string()));
        }

        params
    }
}

/// New listing
#[derive(Debug, Clone, Serialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category_id: u64,
    pub post_type: PostType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
}

impl CreatePostRequest {
    pub fn validate(&self) -> Result<()> {
        require_text("title", &self.title)?;
        require_text("description", &self.description)?;
        require_id("category_id", self.category_id)?;
        validate_price(self.price, self.price_min)
    }
}

/// Partial listing update. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

impl UpdatePostRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.status.is_none()
            && self.condition.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return invalid("nothing to update");
        }
        if let Some(title) = &self.title {
            require_text("title", title)?;
        }
        if let Some(description) = &self.description {
            require_text("description", description)?;
        }
        match self.price {
            Some(price) => validate_price(price, None),
            None => Ok(()),
        }
    }
}

fn validate_price(price: f64, price_min: Option<f64>) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return invalid("price must be a non-negative number");
    }
    if let Some(min) = price_min {
        if !min.is_finite() || min < 0.0 {
            return invalid("price_min must be a non-negative number");
        }
        if min > price {
            return invalid("price_min must not exceed price");
        }
    }
    Ok(())
}
