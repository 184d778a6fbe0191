use actix_web::dev::ServerHandle;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::config::{Config, ConfigError};
use crate::database::Connections;
use crate::server::{Application, Listener};

use super::dispatch::{self, DispatchRejection, Response};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Cannot start server on port {port}, it's already started")]
    AlreadyStarted { port: u16 },

    #[error("Cannot stop server on port {port}, it's not active now")]
    NotActive { port: u16 },

    #[error("Failed to bind port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },
}

/// Construction options for a [`Harness`].
#[derive(Debug, Clone)]
pub struct HarnessOptions {
    pub is_testing: bool,
    pub is_production: bool,
    /// Skip the business routes, keeping only framework-level handling.
    pub without_routes: bool,
    pub port: u16,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            is_testing: true,
            is_production: false,
            without_routes: false,
            port: 3000,
        }
    }
}

impl HarnessOptions {
    pub fn port(port: u16) -> Self {
        Self {
            port,
            ..Self::default()
        }
    }
}

struct Lifecycle {
    config: Config,
    listener: Option<Listener>,
}

/// In-process server wrapper for integration tests
///
/// Owns one [`Application`] and at most one [`Listener`]. The instance is
/// `Stopped` until [`start`](Self::start) or [`restart`](Self::restart)
/// binds a listener and `Stopped` again after [`stop`](Self::stop). A
/// stopped listener stays attached; [`listening`](Self::listening) asks it
/// whether it is still serving.
///
/// ```no_run
/// use lighter_campus::testing::{Harness, HarnessOptions};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let server = Harness::from_env(HarnessOptions::port(4000))?;
/// server.start().await?;
/// assert!(server.listening().await);
/// server.stop().await?;
/// # Ok(())
/// # }
/// ```
pub struct Harness {
    application: Application,
    state: Mutex<Lifecycle>,
}

impl Harness {
    /// Instance configured from a copy of `base` overridden by `options`.
    pub fn new(options: HarnessOptions, base: &Config) -> Self {
        let mut config = base.clone();
        config.is_testing = options.is_testing;
        config.is_production = options.is_production;
        config.port = options.port;
        config.server = None;

        let application = Application::build(&config, !options.without_routes);

        Self {
            application,
            state: Mutex::new(Lifecycle {
                config,
                listener: None,
            }),
        }
    }

    /// Instance over the environment configuration and the process-wide
    /// connections, if they have been started.
    pub fn from_env(options: HarnessOptions) -> Result<Self, ConfigError> {
        let base = Config::load()?.with_connection(Connections::global().pair());

        Ok(Self::new(options, &base))
    }

    pub fn port(&self) -> u16 {
        self.application.config().port
    }

    pub fn application(&self) -> &Application {
        &self.application
    }

    /// Current configuration, including the active listener handle.
    pub async fn config(&self) -> Config {
        self.state.lock().await.config.clone()
    }

    pub async fn listening(&self) -> bool {
        let state = self.state.lock().await;

        state
            .listener
            .as_ref()
            .is_some_and(Listener::is_listening)
    }

    /// Handle of the attached listener, stopped or not.
    pub async fn instance(&self) -> Option<ServerHandle> {
        let state = self.state.lock().await;

        state.listener.as_ref().map(Listener::handle)
    }

    #[tracing::instrument(skip(self), fields(port = self.port()))]
    pub async fn start(&self) -> Result<(), LifecycleError> {
        let mut state = self.state.lock().await;

        if state.listener.as_ref().is_some_and(Listener::is_listening) {
            return Err(LifecycleError::AlreadyStarted { port: self.port() });
        }

        self.bind(&mut state)
    }

    /// Close the current listener, if any, then bind a fresh one.
    ///
    /// The close is awaited, so the old socket is released before the port
    /// is bound again.
    #[tracing::instrument(skip(self), fields(port = self.port()))]
    pub async fn restart(&self) -> Result<(), LifecycleError> {
        let mut state = self.state.lock().await;

        if let Some(mut listener) = state.listener.take() {
            listener.close().await;
        }

        self.bind(&mut state)
    }

    #[tracing::instrument(skip(self), fields(port = self.port()))]
    pub async fn stop(&self) -> Result<(), LifecycleError> {
        let mut state = self.state.lock().await;

        match state.listener.as_mut() {
            Some(listener) if listener.is_listening() => {
                listener.close().await;
                Ok(())
            }
            _ => Err(LifecycleError::NotActive { port: self.port() }),
        }
    }

    fn bind(&self, state: &mut Lifecycle) -> Result<(), LifecycleError> {
        let port = self.port();
        let listener = self
            .application
            .listen(port)
            .map_err(|source| LifecycleError::Bind { port, source })?;

        state.config.server = Some(listener.handle());
        state.listener = Some(listener);

        Ok(())
    }

    /// POST `body` to `/api/{path}` on this instance's port.
    pub async fn post(&self, path: &str, body: Value, token: &str) -> Result<Response, DispatchRejection> {
        dispatch::post(self.port(), path, &body, token).await
    }
}
