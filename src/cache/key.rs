//! Cache key derivation
//!
//! Keys stay human-readable so whole groups can be dropped by prefix
//! (every listing query starts with `posts`).

use crate::client::models::PostQuery;

/// Separator between the resource name and each `label:value` segment
const SEPARATOR: &str = "_";

/// Listing query fields in key order, as (parameter name, key label)
const POST_LIST_FIELDS: [(&str, &str); 6] = [
    ("post_type", "type"),
    ("skip", "skip"),
    ("limit", "limit"),
    ("keyword", "keyword"),
    ("category_id", "cat"),
    ("sort_by", "sort"),
];

/// Build a key from a resource name and its parameters.
///
/// Parameters are visited in the order given by `fields`, not in the order they
/// were supplied, so two logically identical parameter sets always collapse to the
/// same key. Parameters missing from `params` are left out of the key entirely.
/// Parameters not named in `fields` are ignored.
pub fn derive_key(resource: &str, fields: &[(&str, &str)], params: &[(&str, String)]) -> String {
    let mut key = resource.to_string();

    for (name, label) in fields {
        if let Some((_, value)) = params.iter().find(|(k, _)| k == name) {
            key.push_str(SEPARATOR);
            key.push_str(label);
            key.push(':');
            key.push_str(value);
        }
    }

    key
}

/// Key constructors for every cached resource
pub struct CacheKeys;

impl CacheKeys {
    /// Prefix shared by every listing query key
    pub const POSTS_PREFIX: &'static str = "posts";

    /// Listing query key
    pub fn posts(query: &PostQuery) -> String {
        derive_key(
            Self::POSTS_PREFIX,
            &POST_LIST_FIELDS,
            &query.to_query_params(),
        )
    }

    /// Single listing key. Must not start with [`Self::POSTS_PREFIX`].
    pub fn post_detail(post_id: u64) -> String {
        format!("post_detail_{}", post_id)
    }

    pub fn categories() -> String {
        "categories".to_string()
    }

    pub fn favorites() -> String {
        "my_favorites".to_string()
    }
}
