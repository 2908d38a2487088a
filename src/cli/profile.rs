//! Profile commands

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::api::UserApi;
use crate::client::models::{FileUpload, Post, PostType, UpdateProfileRequest, UserProfile};
use crate::error::Result;
use crate::models::{PostDisplay, format_local};
use crate::nav::routes;
use crate::output::{Formattable, print_record};

/// JSON shape of a profile page
#[derive(Serialize)]
struct ProfilePage<'a> {
    user: &'a UserProfile,
    posts: &'a [Post],
}

fn describe(user: &UserProfile, base_url: &str) -> String {
    let mut out = format!(
        "{} (#{})\nEmail:   {}\nTrades:  {}\nJoined:  {}",
        user.username.bold(),
        user.id,
        user.email,
        user.success_trades,
        format_local(&user.created_at)
    );
    if let Some(ref avatar) = user.avatar_url {
        out.push_str(&format!("\nAvatar:  {}{}", base_url, avatar));
    }
    out
}

fn of_type(posts: Vec<Post>, post_type: Option<PostType>) -> Vec<Post> {
    match post_type {
        Some(t) => posts.into_iter().filter(|p| p.post_type == t).collect(),
        None => posts,
    }
}

fn print_page(ctx: &CommandContext, user: &UserProfile, posts: Vec<Post>) -> Result<()> {
    if ctx.format == OutputFormat::Json {
        let page = ProfilePage { user, posts: &posts };
        return print_record(&page, "", ctx.format);
    }

    println!("{}", describe(user, ctx.client.inner().base_url()));
    println!("\n{}", "Listings".bold());
    let rows: Vec<PostDisplay> = posts.into_iter().map(PostDisplay::from).collect();
    rows.print(ctx.format)
}

/// Run the profile show command
pub async fn show(opts: &GlobalOptions, post_type: Option<PostType>) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::PROFILE).await?;
    let user = ctx.require_user().await?;

    let posts = of_type(ctx.client.posts_by_owner(user.id).await?, post_type);
    print_page(&ctx, &user, posts)
}

/// Run the profile user command
pub async fn user(opts: &GlobalOptions, user_id: u64, post_type: Option<PostType>) -> Result<()> {
    let ctx = CommandContext::new(opts, &routes::user(user_id)).await?;

    let (user, posts) = ctx.client.user_listings(user_id).await?;
    print_page(&ctx, &user, of_type(posts, post_type))
}

/// Run the profile update command
pub async fn update(opts: &GlobalOptions, username: &str) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::PROFILE).await?;
    ctx.require_user().await?;

    let request = UpdateProfileRequest {
        username: Some(username.to_string()),
    };
    let user = ctx.client.update_profile(&request).await?;
    ctx.session.replace_user(user.clone()).await;

    let text = format!("{} Username is now {}", "✓".green(), user.username.bold());
    print_record(&user, &text, ctx.format)
}

/// Run the profile avatar command
pub async fn avatar(opts: &GlobalOptions, file: &Path) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::PROFILE).await?;
    ctx.require_user().await?;

    let upload = FileUpload::from_path(file)?;
    let user = ctx.client.upload_avatar(&upload).await?;
    ctx.session.replace_user(user.clone()).await;

    let text = format!("{} Avatar updated", "✓".green());
    print_record(&user, &text, ctx.format)
}
