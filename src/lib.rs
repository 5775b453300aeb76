//! # survey_checker
//!
//! Page bootstrap for the survey project checker.
//!
//! On page load two things happen, strictly in this order:
//!
//! 1. a document-level wheel guard is installed, so spinning the mouse wheel
//!    over a focused `<input type="number">` blurs it instead of changing its
//!    value;
//! 2. the application module's `init` is started and left to run on its own.
//!
//! Everything here is host-agnostic: the DOM is reached through the
//! [`guard::FocusSource`] and [`bootstrap::BootHost`] traits, which lets the
//! sequencing be unit-tested natively. The `survey_checker_web` crate binds
//! those traits to `web-sys`.
//!
//! ```
//! use survey_checker::prelude::*;
//!
//! let guard = WheelGuard::default();
//! assert!(guard.guards("number"));
//! assert!(!guard.guards("text"));
//! ```
//!
//! ## Modules
//!
//! - [`guard`]: wheel-on-number-input guard
//! - [`bootstrap`]: one-shot guard-then-init sequence
//! - [`config`]: page-supplied bootstrap settings
//! - [`error`]: crate error type

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod guard;

pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// ```
/// use survey_checker::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bootstrap::{AppModule, BootHost, BootState, Bootstrap, InitTask};
    pub use crate::config::{BootConfig, InitFailurePolicy};
    pub use crate::error::{Error, Result};
    pub use crate::guard::{
        FocusSource, FocusTarget, GuardOutcome, GuardSubscription, IgnoreReason, WheelGuard,
    };
}
