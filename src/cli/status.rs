//! Status command implementation

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::UserProfile;
use crate::error::Result;
use crate::models::format_local;
use crate::nav::routes;
use crate::output::json::format_json;
use crate::session::jwt;

#[derive(Debug, Serialize)]
struct StatusReport {
    config_path: String,
    api_url: String,
    signed_in: bool,
    user: Option<UserProfile>,
    token_expires_at: Option<DateTime<Utc>>,
    unread_conversations: Option<u32>,
    cache_enabled: bool,
}

/// Run the status command to display configuration and session status
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::STATUS).await?;
    let session = ctx.session().await;

    let unread = match &session.user {
        Some(user) => Some(ctx.client.unread_count(user.id).await),
        None => None,
    };

    let report = StatusReport {
        config_path: ctx.config_path.display().to_string(),
        api_url: ctx.client.inner().base_url().to_string(),
        signed_in: session.is_authenticated(),
        token_expires_at: session.token.as_deref().and_then(jwt::token_expiry),
        user: session.user,
        unread_conversations: unread,
        cache_enabled: ctx.client.is_enabled(),
    };

    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(&report)?);
        return Ok(());
    }

    println!("{}\n", "campusmart status".bold());
    println!("Config file: {}", report.config_path.cyan());
    println!("API:         {}", report.api_url.cyan());
    println!();

    match &report.user {
        Some(user) => {
            println!(
                "{} Signed in as {} <{}> (#{})",
                "✓".green(),
                user.username.bold(),
                user.email,
                user.id
            );
            println!("  {} successful trades", user.success_trades);
        }
        None => {
            println!("{} Not signed in", "✗".red());
            println!("  → Run 'campusmart login' to sign in");
        }
    }

    if let Some(expires) = report.token_expires_at {
        let remaining = expires.signed_duration_since(Utc::now());
        if remaining.num_seconds() > 0 {
            println!(
                "{} Token valid until {} ({}h {}m left)",
                "✓".green(),
                format_local(&expires),
                remaining.num_hours(),
                remaining.num_minutes() % 60
            );
        } else {
            println!("{} Token expired at {}", "⚠".yellow(), format_local(&expires));
        }
    }

    if let Some(count) = report.unread_conversations {
        if count > 0 {
            println!("{} {} unread conversation(s)", "✉".yellow(), count);
        } else {
            println!("{} No unread messages", "○".dimmed());
        }
    }

    if !report.cache_enabled {
        println!("{} Response cache disabled", "○".dimmed());
    }

    println!();
    Ok(())
}
