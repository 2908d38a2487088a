//! Command execution context
//!
//! Every command builds exactly one [`CommandContext`]. It owns the loaded
//! config, the session, the navigator and the cached API client, and is passed
//! by reference to whatever needs them.

use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, warn};

use crate::cache::CachedMarketClient;
use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::MarketClient;
use crate::client::api::AuthApi;
use crate::client::models::{LoginRequest, UserProfile};
use crate::config::Config;
use crate::error::{Result, SessionError};
use crate::nav::{Navigator, TerminalNavigator};
use crate::session::{ConfigTokenStore, Guard, Session, SessionManager};

/// Context for command execution
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// Where the configuration (and the token) lives
    pub config_path: PathBuf,
    pub session: Arc<SessionManager>,
    pub navigator: Arc<TerminalNavigator>,
    /// API client with caching
    pub client: Arc<CachedMarketClient<MarketClient>>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Build the context for a command running on `route`, then restore the
    /// session from the stored token.
    ///
    /// # Errors
    /// Returns error if the config file cannot be read or the HTTP client
    /// cannot be built. A rejected token is not an error; it leaves the
    /// session signed out.
    pub async fn new(opts: &GlobalOptions, route: &str) -> Result<Self> {
        let ctx = Self::build(opts, route)?;
        ctx.session.bootstrap(ctx.client.as_ref()).await;
        Ok(ctx)
    }

    fn build(opts: &GlobalOptions, route: &str) -> Result<Self> {
        let config_path = Config::resolve_path(opts.config_ref())?;
        let config = Config::load_from(&config_path)?;

        let format = opts
            .format
            .or_else(|| config_format(&config))
            .unwrap_or_default();

        let store = Arc::new(ConfigTokenStore::new(config_path.clone()));
        let session = Arc::new(SessionManager::new(store));
        let navigator = Arc::new(TerminalNavigator::new(route));

        let api_url = config.api_url(opts.api_url_ref());
        debug!("Using API at {}", api_url);

        let raw_client = MarketClient::new(
            &api_url,
            config.timeout(),
            session.clone(),
            navigator.clone(),
        )?;

        // Wrap with caching layer (disabled if --no-cache)
        let client = Arc::new(CachedMarketClient::new(raw_client, !opts.no_cache));

        Ok(Self {
            config,
            config_path,
            session,
            navigator,
            client,
            format,
        })
    }

    /// Current session snapshot
    pub async fn session(&self) -> Session {
        self.session.snapshot().await
    }

    /// Signed-in user for protected commands
    pub async fn require_user(&self) -> Result<UserProfile> {
        match self.session.guard().await {
            Guard::Allow => self.session.require_user().await,
            Guard::Wait => Err(SessionError::Bootstrapping.into()),
            Guard::RedirectToLogin => {
                debug!("{} requires a signed-in user", self.navigator.current_route());
                Err(SessionError::NotLoggedIn.into())
            }
        }
    }

    /// Exchange credentials for a token, verify it and persist it
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let token = self.client.login(&request).await?;
        let user = self.client.fetch_profile(&token.access_token).await?;

        self.session.login(user.clone(), token.access_token).await?;
        self.reset_cache();
        Ok(user)
    }

    pub async fn logout(&self) -> Result<()> {
        self.session.logout().await?;
        self.reset_cache();
        Ok(())
    }

    /// User-scoped entries must not survive an account switch
    fn reset_cache(&self) {
        let dropped = self.client.clear();
        if dropped > 0 {
            debug!("Cleared {} cached entries", dropped);
        }
    }

    /// Page size when a listing command gives none
    pub fn page_size(&self) -> u32 {
        self.config.preferences.page_size.max(1)
    }
}

fn config_format(config: &Config) -> Option<OutputFormat> {
    let raw = config.preferences.format.as_deref()?;
    match raw.parse() {
        Ok(format) => Some(format),
        Err(e) => {
            warn!("Ignoring preferences.format: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preferences;
    use crate::nav::routes;
    use tempfile::TempDir;

    fn opts_for(dir: &TempDir) -> GlobalOptions {
        GlobalOptions {
            config: Some(dir.path().join("config.yaml").display().to_string()),
            api_url: Some("http://127.0.0.1:1".to_string()),
            ..GlobalOptions::default()
        }
    }

    #[test]
    fn test_format_precedence() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            preferences: Preferences {
                format: Some("json".to_string()),
                ..Preferences::default()
            },
            ..Config::default()
        };
        config.save_to(&dir.path().join("config.yaml")).unwrap();

        let from_config = CommandContext::build(&opts_for(&dir), routes::HOME).unwrap();
        assert_eq!(from_config.format, OutputFormat::Json);

        let opts = GlobalOptions {
            format: Some(OutputFormat::Table),
            ..opts_for(&dir)
        };
        let from_flag = CommandContext::build(&opts, routes::HOME).unwrap();
        assert_eq!(from_flag.format, OutputFormat::Table);
    }

    #[test]
    fn test_no_cache_disables_cache() {
        let dir = TempDir::new().unwrap();
        let opts = GlobalOptions {
            no_cache: true,
            ..opts_for(&dir)
        };

        let ctx = CommandContext::build(&opts, routes::HOME).unwrap();
        assert!(!ctx.client.is_enabled());
        assert_eq!(ctx.client.inner().base_url(), "http://127.0.0.1:1");
    }

    #[tokio::test]
    async fn test_protected_command_waits_for_bootstrap() {
        let dir = TempDir::new().unwrap();
        let ctx = CommandContext::build(&opts_for(&dir), routes::PROFILE).unwrap();

        let err = ctx.require_user().await.unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Session(SessionError::Bootstrapping)
        ));
    }

    #[tokio::test]
    async fn test_signed_out_without_token() {
        let dir = TempDir::new().unwrap();

        let ctx = CommandContext::new(&opts_for(&dir), routes::HOME).await.unwrap();
        let session = ctx.session().await;

        assert!(!session.is_bootstrapping);
        assert!(!session.is_authenticated());
        assert!(ctx.require_user().await.is_err());
        assert_eq!(ctx.navigator.current_route(), routes::HOME);
    }
}
