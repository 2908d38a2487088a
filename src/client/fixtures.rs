//! Test fixtures and builders for API model types
//!
//! Import via `use crate::client::fixtures` in test modules.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

use super::models::{
    Category, Condition, InboxConversation, Message, Post, PostImage, PostStatus, PostType,
    Report, ReportStatus, Transaction, UserProfile,
};

fn ts() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn user(id: u64, username: &str) -> UserProfile {
    UserProfile {
        id,
        email: format!("{}@edu.example.jp", username),
        username: username.to_string(),
        avatar_url: None,
        success_trades: 0,
        created_at: ts(),
    }
}

pub fn category(id: u64, name: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
    }
}

// ============================================================================
// PostBuilder
// ============================================================================

/// Builder for test listings.
///
/// # Example
/// ```ignore
/// let post = PostBuilder::new(7)
///     .title("Desk")
///     .owner(fixtures::user(2, "lee"))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct PostBuilder {
    post: Post,
}

impl PostBuilder {
    pub fn new(id: u64) -> Self {
        Self {
            post: Post {
                id,
                title: format!("Item {}", id),
                description: "Barely used".to_string(),
                price: 1000.0,
                price_min: None,
                post_type: PostType::Sell,
                condition: Some(Condition::Good),
                status: PostStatus::Available,
                category_id: 1,
                created_at: ts(),
                updated_at: ts(),
                owner: user(1, "owner"),
                category: category(1, "Books"),
                images: Vec::new(),
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.post.title = title.to_string();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.post.price = price;
        self
    }

    pub fn post_type(mut self, post_type: PostType) -> Self {
        self.post.post_type = post_type;
        self
    }

    pub fn status(mut self, status: PostStatus) -> Self {
        self.post.status = status;
        self
    }

    pub fn owner(mut self, owner: UserProfile) -> Self {
        self.post.owner = owner;
        self
    }

    pub fn image(mut self, image_id: u64) -> Self {
        self.post.images.push(PostImage {
            id: image_id,
            image_url: format!("/static/images/{}.jpg", image_id),
        });
        self
    }

    pub fn build(self) -> Post {
        self.post
    }
}

pub fn post(id: u64) -> Post {
    PostBuilder::new(id).build()
}

pub fn message(id: u64, post_id: u64, from: &UserProfile, to: &UserProfile, read: bool) -> Message {
    Message {
        id,
        content: format!("message {}", id),
        post_id,
        sender_id: from.id,
        receiver_id: to.id,
        is_read: read,
        created_at: ts(),
        sender: from.clone(),
        receiver: to.clone(),
    }
}

/// Inbox row between `me` and `other`; `from_other` picks the last sender
pub fn conversation(
    post_id: u64,
    me: &UserProfile,
    other: &UserProfile,
    from_other: bool,
    read: bool,
) -> InboxConversation {
    let (from, to) = if from_other { (other, me) } else { (me, other) };
    InboxConversation {
        post: post(post_id),
        other_user: other.clone(),
        last_message: message(post_id * 100, post_id, from, to, read),
    }
}

pub fn transaction(id: u64, post_id: u64, seller: &UserProfile, buyer: &UserProfile) -> Transaction {
    Transaction {
        id,
        post_id,
        seller_id: seller.id,
        buyer_id: buyer.id,
        seller_confirmed: false,
        buyer_confirmed: false,
        completed: false,
        created_at: ts(),
        completed_at: None,
        seller: seller.clone(),
        buyer: buyer.clone(),
        post: PostBuilder::new(post_id)
            .owner(seller.clone())
            .status(PostStatus::Sold)
            .build(),
    }
}

pub fn report(id: u64, reporter_id: u64, reported_user_id: u64, reason: &str) -> Report {
    Report {
        id,
        reporter_id,
        reported_user_id: Some(reported_user_id),
        reason: reason.to_string(),
        description: None,
        status: ReportStatus::Pending,
        created_at: ts(),
    }
}
