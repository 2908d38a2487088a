//! Display models for CLI output

pub mod display;

pub use display::{
    CategoryDisplay, InboxDisplay, MessageDisplay, PostDisplay, ReportDisplay, TransactionDisplay,
    UserDisplay, format_chat, format_local, format_post_detail,
};
