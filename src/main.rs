mod app;
mod catalog;
mod config;
mod documents;
mod error;
mod extract;
mod orders;
mod products;
mod state;
mod users;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "storefront=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    // The database ping is a startup precondition: no listener is bound
    // until it succeeds, and a failed ping terminates the process.
    let state = state::AppState::init().await?;

    let app = app::build_app(state);
    app::serve(app).await
}
