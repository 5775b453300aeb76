//! Guard-then-init startup sequence.
//!
//! [`Bootstrap::run`] installs the wheel guard through the host and only then
//! starts the application module. The module's initializer is spawned and
//! never awaited here; once started, the module owns its own lifecycle.

use std::future::Future;
use std::pin::Pin;

use tracing::{debug, error, info};

use crate::config::{BootConfig, InitFailurePolicy};
use crate::guard::{GuardSubscription, WheelGuard};
use crate::{Error, Result};

/// The application module. Consumed by `init`, so nothing here keeps a
/// handle to it afterwards.
pub trait AppModule {
    fn init(self) -> impl Future<Output = Result<()>> + 'static;
}

/// The environment the bootstrap runs in (the browser, or a test double).
pub trait BootHost {
    /// Attach `guard` to document-level wheel events. Installing twice must
    /// not attach a second listener.
    fn install_wheel_guard(&mut self, guard: WheelGuard) -> Result<GuardSubscription>;

    /// Run `task` to completion in the background.
    fn spawn_init(&mut self, task: InitTask);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BootState {
    #[default]
    Uninitialized,
    Initializing,
}

/// A started application initializer plus what to do if it fails.
pub struct InitTask {
    init: Pin<Box<dyn Future<Output = Result<()>>>>,
    policy: InitFailurePolicy,
}

impl InitTask {
    pub fn new(init: impl Future<Output = Result<()>> + 'static, policy: InitFailurePolicy) -> Self {
        Self {
            init: Box::pin(init),
            policy,
        }
    }

    pub fn policy(&self) -> InitFailurePolicy {
        self.policy
    }

    /// Drive the initializer. Returns the error only when the policy says the
    /// host should surface it.
    pub async fn run(self) -> Option<Error> {
        let InitTask { init, policy } = self;
        match init.await {
            Ok(()) => {
                info!("application initialized");
                None
            }
            Err(e) => match policy {
                InitFailurePolicy::Report => {
                    error!("application init failed: {e}");
                    None
                }
                InitFailurePolicy::Propagate => Some(e),
            },
        }
    }
}

#[derive(Debug)]
pub struct Bootstrap {
    config: BootConfig,
    state: BootState,
    // Token only; the host keeps the listener alive after this is dropped.
    subscription: Option<GuardSubscription>,
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self::new(BootConfig::default())
    }
}

impl Bootstrap {
    pub fn new(config: BootConfig) -> Self {
        Self {
            config,
            state: BootState::Uninitialized,
            subscription: None,
        }
    }

    pub fn state(&self) -> BootState {
        self.state
    }

    pub fn guard_installed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Install the guard, then start `module`. A second call is a no-op.
    ///
    /// If the guard cannot be installed the module is not started and the
    /// state stays `Uninitialized`.
    pub fn run<H, M>(&mut self, host: &mut H, module: M) -> Result<BootState>
    where
        H: BootHost,
        M: AppModule,
    {
        if self.state == BootState::Initializing {
            debug!("bootstrap already ran, ignoring");
            return Ok(self.state);
        }

        let guard = WheelGuard::new(&self.config);
        debug!(types = ?guard.guarded_types(), "installing wheel guard");
        let sub = host.install_wheel_guard(guard)?;
        self.subscription = Some(sub);

        self.state = BootState::Initializing;
        host.spawn_init(InitTask::new(
            module.init(),
            self.config.init_failure_policy(),
        ));
        debug!("application init started");

        Ok(self.state)
    }
}
