//! Listing filter arguments

use clap::Args;

use super::PaginationArgs;
use crate::client::models::{PostQuery, PostType, SortBy};

/// Filters for `post list`
#[derive(Debug, Clone, Args, Default)]
pub struct PostFilterArgs {
    /// Only listings of this kind
    #[arg(long = "type", value_enum)]
    pub post_type: Option<PostType>,

    /// Search titles and descriptions
    #[arg(long, short = 'k')]
    pub keyword: Option<String>,

    /// Category ID
    #[arg(long)]
    pub category: Option<u64>,

    /// Sort order
    #[arg(long, value_enum)]
    pub sort: Option<SortBy>,

    #[command(flatten)]
    pub pagination: PaginationArgs,
}

impl PostFilterArgs {
    /// Build the backend query, falling back to `default_limit` for the page size
    pub fn to_query(&self, default_limit: u32) -> PostQuery {
        let mut query = PostQuery::new().limit(self.pagination.limit.unwrap_or(default_limit));

        if let Some(post_type) = self.post_type {
            query = query.post_type(post_type);
        }
        if let Some(skip) = self.pagination.skip {
            query = query.skip(skip);
        }
        if let Some(ref keyword) = self.keyword {
            query = query.keyword(keyword.clone());
        }
        if let Some(category) = self.category {
            query = query.category(category);
        }
        if let Some(sort) = self.sort {
            query = query.sort_by(sort);
        }

        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit_applied() {
        let query = PostFilterArgs::default().to_query(10);
        assert_eq!(query.limit, Some(10));
        assert_eq!(query.skip, None);
        assert_eq!(query.post_type, None);
    }

    #[test]
    fn test_all_filters_mapped() {
        let args = PostFilterArgs {
            post_type: Some(PostType::Free),
            keyword: Some("desk".to_string()),
            category: Some(3),
            sort: Some(SortBy::PriceAsc),
            pagination: PaginationArgs {
                skip: Some(20),
                limit: Some(5),
            },
        };

        let query = args.to_query(10);
        assert_eq!(query.post_type, Some(PostType::Free));
        assert_eq!(query.keyword.as_deref(), Some("desk"));
        assert_eq!(query.category_id, Some(3));
        assert_eq!(query.sort_by, Some(SortBy::PriceAsc));
        assert_eq!(query.skip, Some(20));
        assert_eq!(query.limit, Some(5));
    }
}
