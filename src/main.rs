use anyhow::{Context, Result};
use std::time::Instant;
use tokio::time::{interval, Duration};

use portfolio::config::Config;
use portfolio::logging::{flush_interval_secs, log_shutdown, log_startup, tick_aggregator};
use portfolio::server::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    let started = Instant::now();
    let state = AppState::from_config(&cfg);
    let app = create_router(state);

    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    log_startup(&addr, &cfg.site_root.to_string_lossy(), cfg.cache_assets);

    tokio::spawn(async {
        let mut ticker = interval(Duration::from_secs(flush_interval_secs().max(1)));
        loop {
            ticker.tick().await;
            tick_aggregator();
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("server error")?;

    log_shutdown(started.elapsed().as_secs());
    Ok(())
}
