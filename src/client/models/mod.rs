//! Marketplace API data models
//!
//! Response records mirror the backend schemas. Request records validate
//! themselves before anything is sent.

mod auth;
mod message;
mod post;
mod report;
mod transaction;
mod upload;
mod user;

pub use auth::{LoginRequest, RegisterRequest, TokenResponse};
pub use message::{CreateMessageRequest, InboxConversation, MarkReadResponse, Message};
pub use post::{
    Category, Condition, CreatePostRequest, FavoriteStatus, Post, PostImage, PostPage,
    PostQuery, PostStatus, PostType, SortBy, UpdatePostRequest,
};
pub use report::{CreateReportRequest, Report};
#[cfg(test)]
pub use report::ReportStatus;
pub use transaction::{CreateTransactionRequest, Transaction};
pub use upload::FileUpload;
pub use user::{UpdateProfileRequest, UserProfile};

use crate::error::{ApiError, Result};

/// Reject a request before it reaches the network
pub(crate) fn invalid<T>(message: impl Into<String>) -> Result<T> {
    Err(ApiError::Validation(message.into()).into())
}

/// Require a non-blank text field
pub(crate) fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return invalid(format!("{} must not be empty", field));
    }
    Ok(())
}

/// Require a positive identifier
pub(crate) fn require_id(field: &str, value: u64) -> Result<()> {
    if value == 0 {
        return invalid(format!("{} must be a positive id", field));
    }
    Ok(())
}

/// Backend timestamps, which may arrive without a UTC offset
pub(crate) mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Parse RFC 3339, or a naive ISO 8601 timestamp taken as UTC
    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| raw.parse::<NaiveDateTime>().ok().map(|n| n.and_utc()))
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            s: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(dt) => s.serialize_some(&dt.to_rfc3339()),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            d: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            match Option::<String>::deserialize(d)? {
                None => Ok(None),
                Some(raw) => super::parse(&raw).map(Some).ok_or_else(|| {
                    serde::de::Error::custom(format!("invalid timestamp: {raw}"))
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_naive_timestamp_as_utc() {
        let dt = timestamp::parse("2024-03-01T12:30:05.123456").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.hour(), 12);
        assert_eq!(dt.second(), 5);
    }

    #[test]
    fn test_parse_offset_timestamp() {
        let dt = timestamp::parse("2024-03-01T12:30:05+09:00").unwrap();
        assert_eq!(dt.hour(), 3);
    }

    #[test]
    fn test_parse_garbage_timestamp() {
        assert!(timestamp::parse("yesterday").is_none());
    }

    #[test]
    fn test_require_text_rejects_blank() {
        assert!(require_text("title", "   ").is_err());
        assert!(require_text("title", "Desk").is_ok());
    }

    #[test]
    fn test_require_id_rejects_zero() {
        assert!(require_id("post_id", 0).is_err());
        assert!(require_id("post_id", 1).is_ok());
    }
}
