//! Integration-test harness
//!
//! Ephemeral [`Harness`] servers, a [`Registry`] to reuse them by name, the
//! [`dispatch::post`] primitive and the assertion helpers built on it.

pub mod assertions;
pub mod completion;
pub mod dispatch;
pub mod harness;
pub mod registry;
pub mod setup;

pub use assertions::{expect_status, AssertionMismatch, Outcome, ResponseKind, FALSE_TOKEN};
pub use completion::Completion;
pub use dispatch::{DispatchRejection, Response};
pub use harness::{Harness, HarnessOptions, LifecycleError};
pub use registry::Registry;

use crate::config;
use crate::database::{ConnectionError, Connections};

/// Open the process-wide fast/slow connections from the environment
/// configuration. Calling it while they are open is a no-op.
pub async fn start_connection() -> Result<(), ConnectionError> {
    let config = config::load()?;

    Connections::global().start(&config.database).await?;

    Ok(())
}

/// Close the process-wide connections. Safe to call when they are not open.
pub async fn stop_connection() -> Result<(), ConnectionError> {
    Connections::global().stop().await?;

    Ok(())
}
