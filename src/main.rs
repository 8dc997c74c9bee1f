mod app;
mod config;
mod docs;
mod error;
mod state;
mod users;

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "userdir=debug,axum=info,tower_http=info".to_string());
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
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let app_state = state::AppState::init()?;
    let addr = app_state.config.bind_addr();
    tracing::info!(
        docs = %app_state.config.docs.ui_path,
        spec = %app_state.config.docs.spec_path,
        "api documentation enabled"
    );

    let app = app::build_app(app_state);
    app::serve(app, &addr).await
}
