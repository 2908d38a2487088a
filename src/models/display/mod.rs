//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod common;
mod message;
mod post;
mod trade;
mod user;

pub use common::format_local;
pub use message::{InboxDisplay, MessageDisplay, format_chat};
pub use post::{CategoryDisplay, PostDisplay, format_post_detail};
pub use trade::{ReportDisplay, TransactionDisplay};
pub use user::UserDisplay;
