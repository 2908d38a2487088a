//! Route tracking and navigation
//!
//! Every command runs "on" a route, mirroring the pages of the web client.
//! The HTTP layer consults the current route before forcing a redirect to
//! the login entry point. Watched views subscribe to route changes so they
//! close when a redirect takes the user elsewhere.

use colored::Colorize;
use tokio::sync::watch;

/// Application routes
pub mod routes {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const PROFILE: &str = "/profile";
    pub const FAVORITES: &str = "/favorites";
    pub const INBOX: &str = "/inbox";
    pub const TRANSACTIONS: &str = "/transactions";
    pub const NEW_POST: &str = "/posts/new";
    pub const STATUS: &str = "/status";

    pub fn post(post_id: u64) -> String {
        format!("/posts/{}", post_id)
    }

    pub fn edit_post(post_id: u64) -> String {
        format!("/posts/{}/edit", post_id)
    }

    pub fn chat(post_id: u64, other_user_id: u64) -> String {
        format!("/chat/{}/{}", post_id, other_user_id)
    }

    pub fn user(user_id: u64) -> String {
        format!("/users/{}", user_id)
    }
}

/// Login and registration call unauthenticated endpoints and must never be
/// redirected away from on a 401
pub fn is_auth_route(route: &str) -> bool {
    route == routes::LOGIN || route == routes::REGISTER
}

/// Where the user currently is, and how to send them elsewhere
pub trait Navigator: Send + Sync {
    fn current_route(&self) -> String;

    fn navigate(&self, route: &str);
}

/// Navigator for the terminal: tracks the active command's route and tells the
/// user when they have been sent back to the login entry point
pub struct TerminalNavigator {
    route: watch::Sender<String>,
}

impl TerminalNavigator {
    pub fn new(route: impl Into<String>) -> Self {
        let (route, _) = watch::channel(route.into());
        Self { route }
    }

    /// Receiver that sees every later navigation
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.route.subscribe()
    }
}

impl Navigator for TerminalNavigator {
    fn current_route(&self) -> String {
        self.route.borrow().clone()
    }

    fn navigate(&self, route: &str) {
        log::debug!("Navigating to {}", route);
        self.route.send_replace(route.to_string());

        if route == routes::LOGIN {
            eprintln!(
                "{} Your session has expired. Run `campusmart login` to sign in again.",
                "!".yellow().bold()
            );
        }
    }
}

/// Navigator that records every navigation, for tests
#[cfg(test)]
pub struct RecordingNavigator {
    route: std::sync::Mutex<String>,
    visits: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingNavigator {
    pub fn new(route: &str) -> Self {
        Self {
            route: std::sync::Mutex::new(route.to_string()),
            visits: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn current_route(&self) -> String {
        self.route.lock().unwrap().clone()
    }

    fn navigate(&self, route: &str) {
        *self.route.lock().unwrap() = route.to_string();
        self.visits.lock().unwrap().push(route.to_string());
    }
}
