//! Messaging commands
//!
//! `--watch` keeps a view open and refreshes it on a fixed interval until
//! Ctrl-C, or until a rejected credential sends the user back to login.

use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;
use log::warn;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::api::MessageApi;
use crate::client::models::CreateMessageRequest;
use crate::error::Result;
use crate::models::{InboxDisplay, MessageDisplay, format_chat};
use crate::nav::routes;
use crate::output::{Formattable, print_record};
use crate::poll::{PollInterval, spawn_poller, watch_view};

/// Render once, or keep rendering every `interval` while the view is open
async fn watch_or_once<F, Fut>(
    ctx: &CommandContext,
    watch: bool,
    interval: Duration,
    mut render: F,
) -> Result<()>
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: std::future::Future<Output = Result<()>> + Send + 'static,
{
    if !watch {
        return render().await;
    }

    let route = ctx.navigator.subscribe();
    let handle = spawn_poller("view", interval, move || {
        let tick = render();
        async move {
            if let Err(e) = tick.await {
                warn!("Refresh failed: {}", e);
            }
        }
    });

    watch_view(handle, route, tokio::signal::ctrl_c()).await
}

/// Run the message inbox command
pub async fn inbox(opts: &GlobalOptions, watch: bool) -> Result<()> {
    let ctx = Arc::new(CommandContext::new(opts, routes::INBOX).await?);
    let me = ctx.require_user().await?.id;

    let view = ctx.clone();
    watch_or_once(&view, watch, PollInterval::INBOX, move || {
        let ctx = ctx.clone();
        async move {
            let conversations = ctx.client.get_inbox().await?;
            if ctx.format == OutputFormat::Json {
                return print_record(&conversations, "", ctx.format);
            }

            let rows: Vec<InboxDisplay> = conversations
                .iter()
                .map(|c| InboxDisplay::new(c, me))
                .collect();
            rows.print(ctx.format)
        }
    })
    .await
}

/// Run the message chat command
pub async fn chat(opts: &GlobalOptions, post_id: u64, other_user_id: u64, watch: bool) -> Result<()> {
    let ctx = Arc::new(CommandContext::new(opts, &routes::chat(post_id, other_user_id)).await?);
    let me = ctx.require_user().await?.id;

    let view = ctx.clone();
    watch_or_once(&view, watch, PollInterval::CONVERSATION, move || {
        let ctx = ctx.clone();
        async move {
            let messages = ctx.client.get_conversation(post_id, other_user_id).await?;

            // Opening the conversation reads it
            if messages.iter().any(|m| m.receiver_id == me && !m.is_read) {
                ctx.client
                    .mark_conversation_read(post_id, other_user_id)
                    .await?;
            }

            match ctx.format {
                OutputFormat::Json => {
                    let rows: Vec<MessageDisplay> =
                        messages.iter().map(MessageDisplay::from).collect();
                    rows.print(ctx.format)
                }
                OutputFormat::Table => {
                    print!("{}", format_chat(&messages, me));
                    Ok(())
                }
            }
        }
    })
    .await
}

/// Run the message send command
pub async fn send(opts: &GlobalOptions, post_id: u64, receiver_id: u64, text: &str) -> Result<()> {
    let ctx = CommandContext::new(opts, &routes::chat(post_id, receiver_id)).await?;
    ctx.require_user().await?;

    let request = CreateMessageRequest {
        content: text.to_string(),
        post_id,
        receiver_id,
    };

    let message = ctx.client.send_message(&request).await?;
    let text = format!("{} Sent to {}", "✓".green(), message.receiver.username);
    print_record(&message, &text, ctx.format)
}

/// Run the message unread command
pub async fn unread(opts: &GlobalOptions, watch: bool) -> Result<()> {
    let ctx = Arc::new(CommandContext::new(opts, routes::HOME).await?);
    let me = ctx.require_user().await?.id;

    let view = ctx.clone();
    watch_or_once(&view, watch, PollInterval::UNREAD_COUNT, move || {
        let ctx = ctx.clone();
        async move {
            let count = ctx.client.unread_count(me).await;
            match ctx.format {
                OutputFormat::Json => {
                    print_record(&serde_json::json!({ "unread": count }), "", ctx.format)
                }
                OutputFormat::Table => {
                    println!("{}", count);
                    Ok(())
                }
            }
        }
    })
    .await
}

/// Run the message read command
pub async fn read(opts: &GlobalOptions, post_id: u64, other_user_id: u64) -> Result<()> {
    let ctx = CommandContext::new(opts, &routes::chat(post_id, other_user_id)).await?;
    ctx.require_user().await?;

    let updated = ctx
        .client
        .mark_conversation_read(post_id, other_user_id)
        .await?;
    println!("{} Marked {} message(s) read", "✓".green(), updated);
    Ok(())
}
