//! The enable/disable state machine and the polling timer loop.

use std::time::Duration;

use check_session::CheckSession;
use mailbox_locate::{DiscoveryEnv, MailboxLocator};
use status_render::StatusUpdate;

/// Parameters for one enabled checking session.
#[derive(Debug, Clone)]
pub struct Params {
    /// The mailbox to poll.
    pub locator: MailboxLocator,

    /// Time between polls.
    pub interval: Duration,

    /// Status line template with `{new}` and `{cur}` keys.
    pub status_format: String,
}

/// Drive poll cycles forever at the configured interval.
///
/// The first poll runs immediately; each poll's rendered status update is
/// handed to `notify`. Read failures are absorbed inside the session and
/// never end the loop.
pub async fn run<Notify, NotifyFut>(params: Params, mut notify: Notify) -> std::convert::Infallible
where
    Notify: FnMut(StatusUpdate) -> NotifyFut + Send,
    NotifyFut: Future<Output = ()> + Send,
{
    let Params {
        locator,
        interval,
        status_format,
    } = params;

    tracing::info!(
        mailbox_kind = ?locator.kind,
        mailbox_path = %locator.path.display(),
        poll_interval_secs = interval.as_secs(),
        "starting mail check loop"
    );

    let mut session = CheckSession::new(locator);
    let mut ticks = tokio::time::interval(interval);

    loop {
        ticks.tick().await;

        let result = session.poll().await;
        tracing::debug!(total = result.total, new = result.new, "poll complete");

        let update = status_render::render(result, &status_format);
        (notify)(update).await;
    }
}

/// Errors returned while enabling mail checking.
#[derive(Debug, thiserror::Error)]
pub enum EnableError {
    /// No usable mailbox locator could be resolved.
    #[error("mailbox discovery failed: {0}")]
    Discover(#[from] mailbox_locate::DiscoverError),
}

/// Settings for enabling the checker.
#[derive(Debug, Clone)]
pub struct EnableParams {
    /// Explicit mailbox override; discovered from the environment when
    /// absent.
    pub mailbox: Option<MailboxLocator>,

    /// Time between polls.
    pub interval: Duration,

    /// Status line template with `{new}` and `{cur}` keys.
    pub status_format: String,
}

/// The mail-checking state machine.
///
/// Disabled until enabled; while enabled, a single polling task owns the
/// session and its snapshot baseline. Dropping the checker disables it.
#[derive(Debug, Default)]
pub struct MailChecker {
    /// Handle of the active polling task, when enabled.
    task: Option<tokio::task::JoinHandle<()>>,
}

impl MailChecker {
    /// Whether a polling task is currently armed.
    pub fn is_enabled(&self) -> bool {
        self.task.is_some()
    }

    /// Turn checking on: resolve a locator and arm the polling task.
    ///
    /// Returns the resolved locator. Re-enabling restarts the session, so
    /// the baseline resets and the next poll reports everything as new.
    /// When no locator resolves, the checker stays disabled and no timer is
    /// armed.
    pub fn enable<Notify, NotifyFut>(
        &mut self,
        params: EnableParams,
        notify: Notify,
    ) -> Result<MailboxLocator, EnableError>
    where
        Notify: FnMut(StatusUpdate) -> NotifyFut + Send + 'static,
        NotifyFut: Future<Output = ()> + Send + 'static,
    {
        let env = DiscoveryEnv::from_process().map_err(EnableError::Discover)?;
        self.enable_with_env(params, &env, notify)
    }

    /// Like [`MailChecker::enable`], with discovery inputs supplied by the
    /// caller instead of read from the process environment.
    pub fn enable_with_env<Notify, NotifyFut>(
        &mut self,
        params: EnableParams,
        env: &DiscoveryEnv,
        notify: Notify,
    ) -> Result<MailboxLocator, EnableError>
    where
        Notify: FnMut(StatusUpdate) -> NotifyFut + Send + 'static,
        NotifyFut: Future<Output = ()> + Send + 'static,
    {
        let locator = match params.mailbox {
            Some(locator) => locator,
            None => mailbox_locate::discover(env)?,
        };

        self.disable();

        let run_params = Params {
            locator: locator.clone(),
            interval: params.interval,
            status_format: params.status_format,
        };
        self.task = Some(tokio::spawn(async move {
            run(run_params, notify).await;
        }));

        Ok(locator)
    }

    /// Turn checking off: cancel the polling task and discard the session
    /// and its snapshot baseline. A no-op when already disabled.
    pub fn disable(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::info!("mail checking disabled");
        }
    }
}

impl Drop for MailChecker {
    fn drop(&mut self) {
        self.disable();
    }
}
