use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use portfolio_chat::config::Config;
use portfolio_chat::routes;
use portfolio_chat::services::openai::OpenAiProvider;
use portfolio_chat::services::profile::Profile;
use portfolio_chat::services::provider::ChatProvider;
use portfolio_chat::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    let profile = Profile::load_or_default(config.profile_path.as_deref())
        .context("failed to load profile")?;

    let provider: Option<Arc<dyn ChatProvider>> = match &config.api_key {
        Some(key) => {
            let openai = OpenAiProvider::new(key.clone(), &config.base_url, config.model.clone())?;
            Some(Arc::new(openai) as Arc<dyn ChatProvider>)
        }
        None => None,
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let static_dir = config.static_dir.clone();
    tracing::info!(
        has_key = config.has_key(),
        demo_mode = config.demo_mode,
        model = %config.model,
        "starting chat server"
    );

    let state = Arc::new(AppState::new(config, profile, provider));
    let app = routes::build_app(state, &static_dir);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Server running on http://localhost:{}", addr.port());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutting down");
}
