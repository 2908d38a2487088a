//! Common display utilities and helpers

use chrono::{DateTime, Local, Utc};

use crate::client::models::{Post, PostType};

/// Truncate string to max characters with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Local date and time, minute precision
pub fn format_local(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Price as a listing shows it: "Free", a single amount, or a range for
/// buy requests that carry a minimum
pub fn format_price(post: &Post) -> String {
    if post.post_type == PostType::Free {
        return "Free".to_string();
    }

    match post.price_min {
        Some(min) if min < post.price => format!("{}-{}", amount(min), amount(post.price)),
        _ => amount(post.price),
    }
}

fn amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
