#![recursion_limit = "256"]

mod db;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://assistant.db?mode=rwc".to_owned());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    let state = state::AppState::new(pool);

    let app = routes::app(state).expect("router assembly failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, backend = db::backend_name(&database_url), "assistant server listening");
    axum::serve(listener, app).await.expect("server failed");
}
