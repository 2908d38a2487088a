//! Listing commands

use std::path::Path;

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat, PostFilterArgs};
use crate::client::api::{PostApi, TransactionApi};
use crate::client::models::{
    Condition, CreatePostRequest, FileUpload, PostStatus, PostType, UpdatePostRequest,
};
use crate::error::Result;
use crate::models::{CategoryDisplay, PostDisplay, UserDisplay, format_post_detail};
use crate::nav::routes;
use crate::output::{Formattable, print_record};

/// Run the post list command
pub async fn list(opts: &GlobalOptions, filters: &PostFilterArgs) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::HOME).await?;
    let query = filters.to_query(ctx.page_size());

    let page = ctx.client.list_posts(&query).await?;
    debug!(
        "Fetched {} of {} listings ({} cache entries)",
        page.posts.len(),
        page.total,
        ctx.client.stats().size
    );

    if ctx.format == OutputFormat::Json {
        return print_record(&page, "", ctx.format);
    }

    let rows: Vec<PostDisplay> = page.posts.iter().map(PostDisplay::from).collect();
    rows.print(ctx.format)?;

    let shown_until = query.skip.unwrap_or(0) as u64 + page.posts.len() as u64;
    if shown_until < page.total {
        println!(
            "{}",
            format!(
                "Showing {} of {}. Use --skip {} for more.",
                page.posts.len(),
                page.total,
                shown_until
            )
            .dimmed()
        );
    }
    Ok(())
}

/// Run the post show command
pub async fn show(opts: &GlobalOptions, id: u64) -> Result<()> {
    let ctx = CommandContext::new(opts, &routes::post(id)).await?;
    let post = ctx.client.get_post(id).await?;

    // Favorite state only exists for signed-in users
    let favorited = if ctx.session().await.is_authenticated() {
        Some(ctx.client.is_favorited(id).await?)
    } else {
        None
    };

    let text = format_post_detail(&post, ctx.client.inner().base_url(), favorited);
    print_record(&post, text.trim_end(), ctx.format)
}

/// Arguments of `post create`
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub price_min: Option<f64>,
    pub category: u64,
    pub post_type: PostType,
    pub condition: Option<Condition>,
}

/// Run the post create command
pub async fn create(opts: &GlobalOptions, new_post: NewPost) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::NEW_POST).await?;
    ctx.require_user().await?;

    let request = CreatePostRequest {
        title: new_post.title,
        description: new_post.description,
        price: new_post.price,
        category_id: new_post.category,
        post_type: new_post.post_type,
        condition: new_post.condition,
        price_min: new_post.price_min,
    };

    let post = ctx.client.create_post(&request).await?;
    let text = format!("{} Created listing #{} {}", "✓".green(), post.id, post.title.bold());
    print_record(&post, &text, ctx.format)
}

/// Fields `post edit` may change
pub struct PostEdit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub status: Option<PostStatus>,
    pub condition: Option<Condition>,
}

/// Run the post edit command
pub async fn edit(opts: &GlobalOptions, id: u64, changes: PostEdit) -> Result<()> {
    let ctx = CommandContext::new(opts, &routes::edit_post(id)).await?;
    ctx.require_user().await?;

    let request = UpdatePostRequest {
        title: changes.title,
        description: changes.description,
        price: changes.price,
        status: changes.status,
        condition: changes.condition,
    };

    if request.is_empty() {
        println!("{} Nothing to change", "○".dimmed());
        return Ok(());
    }

    let post = ctx.client.update_post(id, &request).await?;
    let text = format!("{} Updated listing #{}", "✓".green(), post.id);
    print_record(&post, &text, ctx.format)
}

/// Run the post delete command
pub async fn delete(opts: &GlobalOptions, id: u64, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts, &routes::post(id)).await?;
    ctx.require_user().await?;

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete listing #{}?", id))
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    ctx.client.delete_post(id).await?;
    println!("{} Deleted listing #{}", "✓".green(), id);
    Ok(())
}

/// Run the post image command
pub async fn image(opts: &GlobalOptions, id: u64, file: &Path) -> Result<()> {
    let ctx = CommandContext::new(opts, &routes::edit_post(id)).await?;
    ctx.require_user().await?;

    let upload = FileUpload::from_path(file)?;
    let image = ctx.client.upload_post_image(id, &upload).await?;

    let text = format!(
        "{} Uploaded {}{}",
        "✓".green(),
        ctx.client.inner().base_url(),
        image.image_url
    );
    print_record(&image, &text, ctx.format)
}

/// Run the post favorite/unfavorite commands
pub async fn set_favorite(opts: &GlobalOptions, id: u64, favorite: bool) -> Result<()> {
    let ctx = CommandContext::new(opts, &routes::post(id)).await?;
    ctx.require_user().await?;

    if favorite {
        ctx.client.favorite_post(id).await?;
        println!("{} Added #{} to favorites", "★".yellow(), id);
    } else {
        ctx.client.unfavorite_post(id).await?;
        println!("{} Removed #{} from favorites", "☆".dimmed(), id);
    }
    Ok(())
}

/// Run the post favorites command
pub async fn favorites(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::FAVORITES).await?;
    ctx.require_user().await?;

    let posts = ctx.client.list_favorites().await?;
    let rows: Vec<PostDisplay> = posts.into_iter().map(PostDisplay::from).collect();
    rows.print(ctx.format)
}

/// Run the post categories command
pub async fn categories(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::HOME).await?;

    let categories = ctx.client.list_categories().await?;
    let rows: Vec<CategoryDisplay> = categories.into_iter().map(CategoryDisplay::from).collect();
    rows.print(ctx.format)
}

/// Run the post contacted command: candidate buyers for `trade create`
pub async fn contacted(opts: &GlobalOptions, id: u64) -> Result<()> {
    let ctx = CommandContext::new(opts, &routes::post(id)).await?;
    ctx.require_user().await?;

    let users = ctx.client.list_contacted_users(id).await?;
    let rows: Vec<UserDisplay> = users.into_iter().map(UserDisplay::from).collect();
    rows.print(ctx.format)
}
