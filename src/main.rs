use anyhow::Context;
use messageboard::{app, db, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "messageboard=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db_pool = db::connect(&config).await?;
    tracing::info!("database ready");

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("couldn't bind {}", config.bind_addr))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app(AppState::sqlite(db_pool.clone())))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db_pool.close().await;
    tracing::info!("bye");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("couldn't listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
}
