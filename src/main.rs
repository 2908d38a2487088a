//! campusmart - command-line client for the campus second-hand marketplace

use clap::Parser;

mod cache;
mod cli;
mod client;
mod config;
mod error;
mod models;
mod nav;
mod output;
mod poll;
mod session;

use cli::args::GlobalOptions;
use cli::{
    Cli, Commands, MessageCommands, PostCommands, ProfileCommands, ReportCommands, TradeCommands,
};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let env = env_logger::Env::new().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if debug {
        builder.filter_module("campusmart", log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Status => cli::status::run(&opts).await,
        Commands::Login { email, password } => {
            cli::auth::login(&opts, email.as_deref(), password.as_deref()).await
        }
        Commands::Register {
            email,
            username,
            password,
        } => {
            cli::auth::register(
                &opts,
                email.as_deref(),
                username.as_deref(),
                password.as_deref(),
            )
            .await
        }
        Commands::Logout => cli::auth::logout(&opts).await,
        Commands::Post(post_cmd) => match post_cmd {
            PostCommands::List { filters } => cli::post::list(&opts, &filters).await,
            PostCommands::Show { id } => cli::post::show(&opts, id).await,
            PostCommands::Create {
                title,
                description,
                price,
                price_min,
                category,
                post_type,
                condition,
            } => {
                let new_post = cli::post::NewPost {
                    title,
                    description,
                    price,
                    price_min,
                    category,
                    post_type,
                    condition,
                };
                cli::post::create(&opts, new_post).await
            }
            PostCommands::Edit {
                id,
                title,
                description,
                price,
                status,
                condition,
            } => {
                let changes = cli::post::PostEdit {
                    title,
                    description,
                    price,
                    status,
                    condition,
                };
                cli::post::edit(&opts, id, changes).await
            }
            PostCommands::Delete { id, yes } => cli::post::delete(&opts, id, yes).await,
            PostCommands::Image { id, file } => cli::post::image(&opts, id, &file).await,
            PostCommands::Favorite { id } => cli::post::set_favorite(&opts, id, true).await,
            PostCommands::Unfavorite { id } => cli::post::set_favorite(&opts, id, false).await,
            PostCommands::Favorites => cli::post::favorites(&opts).await,
            PostCommands::Categories => cli::post::categories(&opts).await,
            PostCommands::Contacted { id } => cli::post::contacted(&opts, id).await,
        },
        Commands::Message(msg_cmd) => match msg_cmd {
            MessageCommands::Inbox { watch } => cli::message::inbox(&opts, watch).await,
            MessageCommands::Chat { post, user, watch } => {
                cli::message::chat(&opts, post, user, watch).await
            }
            MessageCommands::Send { post, user, text } => {
                cli::message::send(&opts, post, user, &text).await
            }
            MessageCommands::Unread { watch } => cli::message::unread(&opts, watch).await,
            MessageCommands::Read { post, user } => cli::message::read(&opts, post, user).await,
        },
        Commands::Trade(trade_cmd) => match trade_cmd {
            TradeCommands::Create { post, buyer } => cli::trade::create(&opts, post, buyer).await,
            TradeCommands::Confirm { id } => cli::trade::confirm(&opts, id).await,
            TradeCommands::Pending => cli::trade::pending(&opts).await,
        },
        Commands::Profile(profile_cmd) => match profile_cmd {
            ProfileCommands::Show { post_type } => cli::profile::show(&opts, post_type).await,
            ProfileCommands::User { id, post_type } => {
                cli::profile::user(&opts, id, post_type).await
            }
            ProfileCommands::Update { username } => cli::profile::update(&opts, &username).await,
            ProfileCommands::Avatar { file } => cli::profile::avatar(&opts, &file).await,
        },
        Commands::Report(report_cmd) => match report_cmd {
            ReportCommands::Create {
                user,
                reason,
                description,
            } => cli::report::create(&opts, user, &reason, description.as_deref()).await,
        },
    }
}
