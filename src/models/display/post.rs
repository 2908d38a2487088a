//! Listing display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_local, format_price, truncate_string};
use crate::client::models::{Category, Post};

/// Listing row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PostDisplay {
    #[tabled(rename = "ID")]
    pub id: u64,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "TYPE")]
    #[serde(rename = "type")]
    pub post_type: String,

    #[tabled(rename = "PRICE")]
    pub price: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "CATEGORY")]
    pub category: String,

    #[tabled(rename = "OWNER")]
    pub owner: String,

    #[tabled(rename = "POSTED")]
    pub posted: String,
}

impl From<&Post> for PostDisplay {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: truncate_string(&post.title, 40),
            post_type: post.post_type.as_str().to_string(),
            price: format_price(post),
            status: post.status.as_str().to_string(),
            category: post.category.name.clone(),
            owner: post.owner.username.clone(),
            posted: format_local(&post.created_at),
        }
    }
}

impl From<Post> for PostDisplay {
    fn from(post: Post) -> Self {
        PostDisplay::from(&post)
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CategoryDisplay {
    #[tabled(rename = "ID")]
    pub id: u64,

    #[tabled(rename = "NAME")]
    pub name: String,
}

impl From<Category> for CategoryDisplay {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

/// Multi-line detail view of one listing
pub fn format_post_detail(post: &Post, base_url: &str, is_favorited: Option<bool>) -> String {
    let mut out = String::new();

    out.push_str(&format!("#{} {}\n", post.id, post.title));
    out.push_str(&format!(
        "{} | {} | {}\n",
        post.post_type.as_str(),
        format_price(post),
        post.status.as_str()
    ));
    out.push_str(&format!("Category:  {}\n", post.category.name));
    if let Some(condition) = post.condition {
        out.push_str(&format!("Condition: {}\n", condition.as_str()));
    }
    out.push_str(&format!(
        "Owner:     {} (#{}, {} trades)\n",
        post.owner.username, post.owner.id, post.owner.success_trades
    ));
    out.push_str(&format!("Posted:    {}\n", format_local(&post.created_at)));
    if let Some(favorited) = is_favorited {
        out.push_str(&format!(
            "Favorite:  {}\n",
            if favorited { "yes" } else { "no" }
        ));
    }

    out.push('\n');
    out.push_str(post.description.trim_end());
    out.push('\n');

    if !post.images.is_empty() {
        out.push_str("\nImages:\n");
        for image in &post.images {
            out.push_str(&format!("  {}{}\n", base_url, image.image_url));
        }
    }

    out
}
