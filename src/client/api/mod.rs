//! API trait definitions split by responsibility
//!
//! The marketplace API surface is organized into focused sub-traits:
//! - [`AuthApi`] - Registration, token exchange and profile verification
//! - [`PostApi`] - Listings, images, categories and favorites
//! - [`MessageApi`] - Direct messages and the inbox
//! - [`TransactionApi`] - Sale creation and two-sided confirmation
//! - [`UserApi`] - The signed-in user's own profile
//! - [`ReportApi`] - Reporting other users
//!
//! The [`MarketApi`] super-trait combines all of them.

mod auth;
mod messages;
mod posts;
mod reports;
mod transactions;
mod users;

pub use auth::AuthApi;
pub use messages::MessageApi;
pub use posts::PostApi;
pub use reports::ReportApi;
pub use transactions::TransactionApi;
pub use users::UserApi;

/// Every marketplace operation
pub trait MarketApi:
    AuthApi + PostApi + MessageApi + TransactionApi + UserApi + ReportApi
{
}

impl<T> MarketApi for T where
    T: AuthApi + PostApi + MessageApi + TransactionApi + UserApi + ReportApi
{
}
