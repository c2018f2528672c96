use std::error::Error;

use tracing_subscriber::EnvFilter;

use form_pdf::adapters::http;
use form_pdf::config::AppConfig;
use form_pdf::context::AppContext;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);

    config.validate()?;
    let addr = config.server.socket_addr()?;
    let cors_origins = config.server.cors_origins_list();

    let context = AppContext::from_config(config);
    let app = http::router(context.api_state(), &cors_origins);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "form-pdf listening");
    axum::serve(listener, app).await?;

    Ok(())
}

/// `RUST_LOG` wins over `server.log_level`. JSON lines in production.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
