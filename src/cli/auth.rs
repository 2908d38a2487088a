//! Sign-in, registration and sign-out

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::api::AuthApi;
use crate::client::models::RegisterRequest;
use crate::error::Result;
use crate::models::UserDisplay;
use crate::nav::{Navigator, routes};
use crate::output::print_record;

fn prompt_text(prompt: &str, given: Option<&str>) -> Result<String> {
    match given {
        Some(value) => Ok(value.to_string()),
        None => Ok(Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact_text()?),
    }
}

fn prompt_password(given: Option<&str>, confirm: bool) -> Result<String> {
    if let Some(value) = given {
        return Ok(value.to_string());
    }

    let theme = ColorfulTheme::default();
    let mut prompt = Password::with_theme(&theme).with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Repeat password", "Passwords do not match");
    }
    Ok(prompt.interact()?)
}

/// Run the login command
pub async fn login(
    opts: &GlobalOptions,
    email: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::LOGIN).await?;

    let email = prompt_text("Email", email)?;
    let password = prompt_password(password, false)?;

    let user = ctx.login(&email, &password).await?;
    ctx.navigator.navigate(routes::HOME);

    let text = format!(
        "{} Signed in as {} <{}>",
        "✓".green(),
        user.username.bold(),
        user.email
    );
    print_record(&UserDisplay::from(&user), &text, ctx.format)
}

/// Run the register command. A successful registration signs the new account in.
pub async fn register(
    opts: &GlobalOptions,
    email: Option<&str>,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::REGISTER).await?;

    let request = RegisterRequest {
        email: prompt_text("Email", email)?,
        username: prompt_text("Username", username)?,
        password: prompt_password(password, true)?,
    };

    let created = ctx.client.register(&request).await?;
    debug!("Registered user #{}", created.id);

    let user = ctx.login(&request.email, &request.password).await?;
    ctx.navigator.navigate(routes::HOME);

    let text = format!(
        "{} Welcome, {}! Your account is ready.",
        "✓".green(),
        user.username.bold()
    );
    print_record(&UserDisplay::from(&user), &text, ctx.format)
}

/// Run the logout command
pub async fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::LOGIN).await?;
    let was_signed_in = ctx.session().await.is_authenticated();

    ctx.logout().await?;

    if was_signed_in {
        println!("{} Signed out", "✓".green());
    } else {
        println!("{} Not signed in", "○".dimmed());
    }
    Ok(())
}
