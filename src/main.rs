//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; screens delegate to the use cases.

use dotenv::dotenv;
use newsdesk::adapters::api::{HttpLocationApi, HttpUserApi, MockLocation, MockUserApi};
use newsdesk::adapters::platform::{SystemClipboard, TerminalShare};
use newsdesk::adapters::session::MemorySession;
use newsdesk::adapters::ui::notifier::TerminalNotifier;
use newsdesk::adapters::ui::tui::TuiInputPort;
use newsdesk::ports::{
    ClipboardPort, InputPort, LocationPort, NotifierPort, SessionPort, SharePort, UserApiPort,
};
use newsdesk::shared::config::AppConfig;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    newsdesk::adapters::ui::init_ui();

    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "config load failed, using defaults");
            AppConfig::default()
        }
    };
    let timeout = Duration::from_secs(cfg.request_timeout_secs_or_default());

    // --- Collaborators: HTTP service or in-memory mock ---
    let (api, location): (Arc<dyn UserApiPort>, Arc<dyn LocationPort>) = if cfg.use_mock_api() {
        warn!("NEWSDESK_USE_MOCK_API set, using in-memory user API");
        let api: Arc<dyn UserApiPort> = Arc::new(MockUserApi::new());
        let location: Arc<dyn LocationPort> = Arc::new(MockLocation::unknown());
        (api, location)
    } else {
        let base_url = cfg.api_base_url_or_default();
        info!(
            url = %base_url,
            authenticated = cfg.api_token().is_some(),
            timeout_secs = timeout.as_secs(),
            "user API"
        );
        let api = HttpUserApi::new(base_url, cfg.api_token(), timeout)
            .map_err(|e| anyhow::anyhow!("{}", e))?;
        let location = HttpLocationApi::new(cfg.location_url_or_default(), timeout)
            .map_err(|e| anyhow::anyhow!("{}", e))?;
        let api: Arc<dyn UserApiPort> = Arc::new(api);
        let location: Arc<dyn LocationPort> = Arc::new(location);
        (api, location)
    };

    // --- Auth session (restored from config, otherwise signed out) ---
    let restored = cfg.restored_user();
    if let Some(user) = &restored {
        info!(user = %user.display_name(), "restoring session");
    }
    let session: Arc<dyn SessionPort> = Arc::new(MemorySession::new(Arc::clone(&api), restored));

    // --- Platform capabilities ---
    let share: Arc<dyn SharePort> = Arc::new(TerminalShare);
    let clipboard: Arc<dyn ClipboardPort> = Arc::new(SystemClipboard::new());
    let notifier: Arc<dyn NotifierPort> = Arc::new(TerminalNotifier);

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        api, location, session, share, clipboard, notifier,
    ));

    // --- Run (home menu -> Article / Profile / Register) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
