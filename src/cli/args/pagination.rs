//! Offset pagination arguments

use clap::Args;

/// Offset/limit window over a listing
#[derive(Debug, Clone, Args, Default)]
pub struct PaginationArgs {
    /// Number of results to skip
    #[arg(long)]
    pub skip: Option<u32>,

    /// Maximum number of results (defaults to `preferences.page_size`)
    #[arg(long, short = 'n')]
    pub limit: Option<u32>,
}
