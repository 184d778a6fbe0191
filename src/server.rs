//! Application builder and the listener it produces
//!
//! An [`Application`] is inert: building one never touches the network.
//! [`Application::listen`] binds a [`Listener`], whose live state is read
//! from the server task itself rather than from a flag kept beside it.

use std::io;
use std::sync::Arc;

use actix_web::dev::{Server, ServerHandle};
use actix_web::middleware::Logger;
use actix_web::web::{self, Data, ServiceConfig};
use actix_web::{App, HttpServer};
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::router;

/// Request-handling application assembled from a [`Config`].
#[derive(Clone)]
pub struct Application {
    config: Arc<Config>,
    attach_routes: bool,
}

impl Application {
    /// Without routes only the framework-level behaviour is mounted: the 404
    /// fallback and the 412 answer to unreadable JSON bodies.
    pub fn build(config: &Config, attach_routes: bool) -> Self {
        Self {
            config: Arc::new(config.clone()),
            attach_routes,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn routes_attached(&self) -> bool {
        self.attach_routes
    }

    pub fn configure(&self, app: &mut ServiceConfig) {
        app.app_data(router::json_config());

        if let Some(connection) = &self.config.connection {
            app.app_data(Data::new(connection.clone()));
        }

        if self.attach_routes {
            router::route(app);
        }
    }

    /// Bind a single-worker listener on `localhost:{port}` and start serving
    /// in the background. Must be called from within an actix system.
    #[tracing::instrument(skip(self), fields(routes = self.attach_routes))]
    pub fn listen(&self, port: u16) -> io::Result<Listener> {
        let application = self.clone();
        let server = HttpServer::new(move || {
            let application = application.clone();

            App::new()
                .configure(move |app| application.configure(app))
                .default_service(web::to(router::not_found))
                .wrap(Logger::default())
        })
        .workers(1)
        .disable_signals()
        .shutdown_timeout(1)
        .bind(("localhost", port))?
        .run();

        tracing::info!(port, "Listener bound");

        Ok(Listener::spawn(server, port))
    }

    /// Long-running server for the binary, with signal handling and the
    /// default worker count.
    pub fn serve(&self, host: &str, port: u16) -> io::Result<Server> {
        let application = self.clone();
        let server = HttpServer::new(move || {
            let application = application.clone();

            App::new()
                .configure(move |app| application.configure(app))
                .default_service(web::to(router::not_found))
                .wrap(Logger::default())
        })
        .bind((host, port))?
        .run();

        tracing::info!(host, port, "Server started");

        Ok(server)
    }
}

/// Live network binding produced by [`Application::listen`].
pub struct Listener {
    handle: ServerHandle,
    task: Option<JoinHandle<io::Result<()>>>,
    port: u16,
}

impl Listener {
    fn spawn(server: Server, port: u16) -> Self {
        let handle = server.handle();
        let task = actix_web::rt::spawn(server);

        Self {
            handle,
            task: Some(task),
            port,
        }
    }

    pub fn handle(&self) -> ServerHandle {
        self.handle.clone()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Whether the server task is still running.
    pub fn is_listening(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop accepting connections and wait until the server task is gone,
    /// so the port can be bound again right away. Closing twice is a no-op.
    #[tracing::instrument(skip(self), fields(port = self.port))]
    pub async fn close(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };

        self.handle.stop(true).await;

        match task.await {
            Ok(Ok(())) => tracing::info!("Listener closed"),
            Ok(Err(e)) => tracing::error!(error = %e, "Listener exited with an error"),
            Err(e) => tracing::error!(error = %e, "Listener task failed"),
        }
    }
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("port", &self.port)
            .field("listening", &self.is_listening())
            .finish()
    }
}
