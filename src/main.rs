use std::io;

use lighter_campus::config;
use lighter_campus::{Application, Config, Connections, logging};

#[actix::main]
async fn main() -> io::Result<()> {
    logging::init("info");

    let app = config::load().map_err(io::Error::other)?;

    Connections::global()
        .start(&app.database)
        .await
        .map_err(io::Error::other)?;

    let config = Config::from_app(&app).with_connection(Connections::global().pair());
    let application = Application::build(&config, true);

    let result = application.serve(&app.server.host, app.server.port)?.await;

    if let Err(e) = Connections::global().stop().await {
        tracing::error!(error = %e, "Failed to close connections");
    }

    result
}
