#![recursion_limit = "256"]

mod db;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    let state = state::AppState::new(pool);

    // Bootstrap the first manager account when configured (non-fatal).
    match services::auth::seed_admin(&state.pool).await {
        Ok(Some(email)) => tracing::info!(%email, "admin account seeded"),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "admin seed failed"),
    }

    let app = routes::leptos_app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "fleetdesk listening");
    axum::serve(listener, app).await.expect("server failed");
}
