//! Wiring & DI. Entry point: bootstrap adapters, inject into the controller, run UI.
//! No business logic here; the request lifecycle lives in RequestController.

use dotenv::dotenv;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tweet_insight::adapters::ai::{MockClassifier, OpenAiClassifier};
use tweet_insight::adapters::content::PlaceholderContentSource;
use tweet_insight::adapters::notify::TracingObserver;
use tweet_insight::adapters::persistence::{HttpPersistenceGateway, MemoryGateway};
use tweet_insight::adapters::ui::tui::TuiInputPort;
use tweet_insight::ports::{
    AnalysisObserver, ContentSource, InputPort, PersistenceGateway, SentimentClassifier,
};
use tweet_insight::shared::config::AppConfig;
use tweet_insight::usecases::{AnalysisSession, RequestController};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found (check CWD)"),
    }

    tweet_insight::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration, using defaults");
        AppConfig::default()
    });
    let timeout = cfg.http_timeout();

    // --- Classifier ---
    let classifier: Arc<dyn SentimentClassifier> = if let Some(api_key) = cfg.ai_api_key() {
        info!(
            model = %cfg.ai_model_or_default(),
            url = %cfg.ai_api_url_or_default(),
            "AI classification enabled with OpenAI adapter"
        );
        Arc::new(
            OpenAiClassifier::new(
                cfg.ai_api_url_or_default(),
                api_key,
                cfg.ai_model_or_default(),
                timeout,
            )
            .map_err(|e| anyhow::anyhow!("{}", e))?,
        )
    } else {
        warn!("TWEET_INSIGHT_AI_API_KEY not set, using mock classifier");
        Arc::new(MockClassifier::with_delay(cfg.mock_delay_ms_or_default()))
    };

    // --- Persistence gateway ---
    let offline_store = cfg.is_offline().then(|| Arc::new(MemoryGateway::new()));
    let gateway: Arc<dyn PersistenceGateway> = if let Some(store) = &offline_store {
        info!("offline mode: records are kept in memory");
        Arc::clone(store) as Arc<dyn PersistenceGateway>
    } else {
        let http = HttpPersistenceGateway::new(cfg.persist_url_or_default(), timeout)
            .map_err(|e| anyhow::anyhow!("{}", e))?;
        info!(url = %http.url(), "records will be posted to analysis API");
        Arc::new(http)
    };

    let content: Arc<dyn ContentSource> = Arc::new(PlaceholderContentSource::new());
    let observer: Arc<dyn AnalysisObserver> = Arc::new(TracingObserver);

    // --- Session (owned here, lent to the controller per request) ---
    let session = Arc::new(RwLock::new(AnalysisSession::new()));
    let controller = Arc::new(RequestController::new(
        content, classifier, gateway, observer,
    ));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        Arc::clone(&controller),
        Arc::clone(&session),
    ));

    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let stats = session.read().await.stats();
    info!(
        total = stats.total,
        positive = stats.positive,
        negative = stats.negative,
        "session finished"
    );
    if let Some(store) = &offline_store {
        info!(accepted = store.accepted().await, "offline records accepted");
    }

    Ok(())
}
