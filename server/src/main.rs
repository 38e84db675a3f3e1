mod config;
mod error;
mod routes;

use error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(ServerError::Bind)?;

    tracing::info!(%addr, "loginboard listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
