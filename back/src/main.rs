use std::sync::Arc;

use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;
use todos_back::{
    clock::{Clock, SystemClock},
    config::Args,
    store::TaskStore,
    AppState,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let store = if args.empty {
        TaskStore::new()
    } else {
        TaskStore::seeded(clock.now())
    };

    let state = Arc::new(AppState::new(store, clock, args.due_date_rule));
    let app = todos_back::app(state);

    info!(addr = %args.addr, due_date_rule = ?args.due_date_rule, "listening");

    match (args.cert, args.key) {
        (Some(cert), Some(key)) => {
            let config = RustlsConfig::from_pem_file(cert, key).await?;
            axum_server::bind_rustls(args.addr, config)
                .serve(app.into_make_service())
                .await?;
        }
        _ => {
            axum_server::bind(args.addr)
                .serve(app.into_make_service())
                .await?;
        }
    }

    Ok(())
}
