//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod auth;
pub mod context;
pub mod message;
pub mod post;
pub mod profile;
pub mod report;
pub mod status;
pub mod trade;

pub use args::{OutputFormat, PostFilterArgs};
pub use context::CommandContext;

use crate::client::models::{Condition, PostStatus, PostType};

/// campusmart - buy, sell and give away things on campus
#[derive(Parser, Debug)]
#[command(name = "campusmart")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "CAMPUSMART_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "CAMPUSMART_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Marketplace backend address
    #[arg(long, global = true, env = "CAMPUSMART_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "CAMPUSMART_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Bypass cache, fetch fresh data from the backend
    #[arg(long, global = true, env = "CAMPUSMART_NO_CACHE", hide_env = true)]
    pub no_cache: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show configuration and session status
    Status,

    /// Sign in with email and password
    Login {
        /// Account email (prompted when omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long, short = 'p', env = "CAMPUSMART_PASSWORD", hide_env = true)]
        password: Option<String>,
    },

    /// Create a new account
    Register {
        #[arg(long, short = 'e')]
        email: Option<String>,

        #[arg(long, short = 'u')]
        username: Option<String>,

        #[arg(long, short = 'p', env = "CAMPUSMART_PASSWORD", hide_env = true)]
        password: Option<String>,
    },

    /// Forget the stored credential
    Logout,

    /// Browse and manage listings
    #[command(subcommand)]
    Post(PostCommands),

    /// Chat with buyers and sellers
    #[command(subcommand, visible_alias = "msg")]
    Message(MessageCommands),

    /// Record and confirm trades
    #[command(subcommand)]
    Trade(TradeCommands),

    /// View and edit your profile
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Report another user
    #[command(subcommand)]
    Report(ReportCommands),
}

/// Listing subcommands
#[derive(Subcommand, Debug)]
pub enum PostCommands {
    /// List listings
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        filters: PostFilterArgs,
    },

    /// Show one listing
    Show {
        /// Listing ID
        id: u64,
    },

    /// Create a listing
    Create {
        #[arg(long, short = 't')]
        title: String,

        #[arg(long, short = 'd')]
        description: String,

        /// Price (0 for free items)
        #[arg(long, default_value_t = 0.0)]
        price: f64,

        /// Lower bound of a negotiable price
        #[arg(long)]
        price_min: Option<f64>,

        /// Category ID (see `post categories`)
        #[arg(long, short = 'c')]
        category: u64,

        #[arg(long = "type", value_enum, default_value = "sell")]
        post_type: PostType,

        #[arg(long, value_enum)]
        condition: Option<Condition>,
    },

    /// Edit one of your listings
    Edit {
        /// Listing ID
        id: u64,

        #[arg(long, short = 't')]
        title: Option<String>,

        #[arg(long, short = 'd')]
        description: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long, value_enum)]
        status: Option<PostStatus>,

        #[arg(long, value_enum)]
        condition: Option<Condition>,
    },

    /// Delete one of your listings
    Delete {
        /// Listing ID
        id: u64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Attach an image to a listing
    Image {
        /// Listing ID
        id: u64,

        /// Image file
        file: PathBuf,
    },

    /// Add a listing to your favorites
    Favorite {
        /// Listing ID
        id: u64,
    },

    /// Remove a listing from your favorites
    Unfavorite {
        /// Listing ID
        id: u64,
    },

    /// List your favorites
    Favorites,

    /// List categories
    Categories,

    /// Users who messaged you about a listing
    Contacted {
        /// Listing ID
        id: u64,
    },
}

/// Messaging subcommands
#[derive(Subcommand, Debug)]
pub enum MessageCommands {
    /// Latest message of each conversation
    Inbox {
        /// Keep refreshing until Ctrl-C
        #[arg(long, short = 'w')]
        watch: bool,
    },

    /// Show a conversation about a listing
    Chat {
        /// Listing ID
        post: u64,

        /// The other participant's user ID
        user: u64,

        /// Keep refreshing until Ctrl-C
        #[arg(long, short = 'w')]
        watch: bool,
    },

    /// Send a message
    Send {
        /// Listing ID
        post: u64,

        /// Recipient user ID
        user: u64,

        /// Message text
        text: String,
    },

    /// Number of conversations with unread messages
    Unread {
        /// Keep refreshing until Ctrl-C
        #[arg(long, short = 'w')]
        watch: bool,
    },

    /// Mark a conversation as read
    Read {
        /// Listing ID
        post: u64,

        /// The other participant's user ID
        user: u64,
    },
}

/// Trade subcommands
#[derive(Subcommand, Debug)]
pub enum TradeCommands {
    /// Record a sale of your listing to a buyer
    Create {
        /// Listing ID
        post: u64,

        /// Buyer user ID (see `post contacted`)
        buyer: u64,
    },

    /// Confirm a trade you took part in
    Confirm {
        /// Transaction ID
        id: u64,
    },

    /// Trades waiting for your confirmation
    Pending,
}

/// Profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show your profile and your listings
    Show {
        /// Only listings of this type
        #[arg(long = "type", value_enum)]
        post_type: Option<PostType>,
    },

    /// Show another user's profile and listings
    User {
        /// User ID
        id: u64,

        /// Only listings of this type
        #[arg(long = "type", value_enum)]
        post_type: Option<PostType>,
    },

    /// Change your username
    Update {
        #[arg(long, short = 'u')]
        username: String,
    },

    /// Upload a new avatar
    Avatar {
        /// Image file
        file: PathBuf,
    },
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// File a report against a user
    Create {
        /// Reported user ID
        user: u64,

        /// Short reason
        reason: String,

        /// Details
        #[arg(long, short = 'd')]
        description: Option<String>,
    },
}
