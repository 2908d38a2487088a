//! Trade commands

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::api::{TransactionApi, UserApi};
use crate::client::models::CreateTransactionRequest;
use crate::error::Result;
use crate::models::TransactionDisplay;
use crate::nav::routes;
use crate::output::{Formattable, print_record};

/// Run the trade create command
pub async fn create(opts: &GlobalOptions, post_id: u64, buyer_id: u64) -> Result<()> {
    let ctx = CommandContext::new(opts, &routes::post(post_id)).await?;
    let me = ctx.require_user().await?;

    let request = CreateTransactionRequest { post_id, buyer_id };
    request.validate_for_seller(me.id)?;

    let tx = ctx.client.create_transaction(&request).await?;
    let text = format!(
        "{} Trade #{} recorded: #{} sold to {}. Both sides must now confirm.",
        "✓".green(),
        tx.id,
        tx.post_id,
        tx.buyer.username.bold()
    );
    print_record(&tx, &text, ctx.format)
}

/// Run the trade confirm command
pub async fn confirm(opts: &GlobalOptions, id: u64) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::TRANSACTIONS).await?;
    ctx.require_user().await?;

    let tx = ctx.client.confirm_transaction(id).await?;

    // A completed trade bumps our success count
    if tx.completed {
        let user = ctx.client.current_user().await?;
        ctx.session.replace_user(user).await;
    }

    let text = if tx.completed {
        format!("{} Trade #{} completed", "✓".green(), tx.id)
    } else {
        format!(
            "{} Confirmed trade #{}; waiting for the other side",
            "✓".green(),
            tx.id
        )
    };
    print_record(&tx, &text, ctx.format)
}

/// Run the trade pending command
pub async fn pending(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::TRANSACTIONS).await?;
    let me = ctx.require_user().await?;

    let pending = ctx.client.list_pending_transactions().await?;
    let rows: Vec<TransactionDisplay> = pending
        .iter()
        .filter(|tx| tx.awaits_confirmation_from(me.id))
        .map(TransactionDisplay::from)
        .collect();
    rows.print(ctx.format)
}
