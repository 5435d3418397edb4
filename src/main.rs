//! FreePro host: serves the server-rendered shell, the client bundle, and the
//! calculator pages.

mod config;
mod routes;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    tracing::info!(
        project = %config.app.firestore.project_id,
        collection = %config.app.firestore.collection,
        calculators = %config.calculators_dir.display(),
        "configuration loaded"
    );

    let app = routes::app(&config).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "freepro listening");
    axum::serve(listener, app).await.expect("server failed");
}
