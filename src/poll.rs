//! Fixed-interval background refresh
//!
//! Messaging has no push channel, so the unread badge, the inbox and open
//! conversations are refreshed by polling. Each poller is a tokio task owned by
//! a [`PollHandle`]; dropping the handle stops it. [`watch_view`] keeps one
//! open until the user interrupts it or is sent to the login page.

use std::future::Future;
use std::time::Duration;

use log::debug;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::error::{Result, SessionError};
use crate::nav::routes;

/// Refresh intervals per view
pub struct PollInterval;

impl PollInterval {
    pub const UNREAD_COUNT: Duration = Duration::from_secs(60);
    pub const INBOX: Duration = Duration::from_secs(60);
    pub const CONVERSATION: Duration = Duration::from_secs(5);
}

/// Owner of a running poller
#[derive(Debug)]
pub struct PollHandle {
    name: &'static str,
    task: JoinHandle<()>,
}

impl PollHandle {
    /// Stop polling. An in-flight tick is abandoned.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        debug!("Stopping {} poller", self.name);
        self.task.abort();
    }
}

/// Run `tick` now and then every `interval` until the handle goes away.
///
/// A tick that overruns the interval delays the next one instead of
/// triggering a burst.
pub fn spawn_poller<F, Fut>(name: &'static str, interval: Duration, mut tick: F) -> PollHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let task = tokio::spawn(async move {
        debug!("Starting {} poller every {:?}", name, interval);

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            tick().await;
        }
    });

    PollHandle { name, task }
}

/// Keep `handle` polling until `interrupt` resolves or `route` moves to the
/// login page. The poller is stopped either way.
///
/// # Errors
/// Returns [`SessionError::NotLoggedIn`] when a rejected credential redirected
/// the user, or the error `interrupt` resolved with.
pub async fn watch_view<I>(
    handle: PollHandle,
    mut route: watch::Receiver<String>,
    interrupt: I,
) -> Result<()>
where
    I: Future<Output = std::io::Result<()>>,
{
    let redirected = async move {
        let reached = route.wait_for(|r| r == routes::LOGIN).await.is_ok();
        if !reached {
            // Navigator gone: only the interrupt can end the view
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        signal = interrupt => {
            handle.stop();
            signal?;
            Ok(())
        }
        () = redirected => {
            debug!("Left the {} view for {}", handle.name, routes::LOGIN);
            handle.stop();
            Err(SessionError::NotLoggedIn.into())
        }
    }
}
