use lexis_config::Config;
use lexis_core::HistoryStore;
use lexis_types::TargetLanguage;
use tokio::sync::{Mutex, RwLock};

pub struct AppState {
    pub config: Config,
    pub target_language: RwLock<TargetLanguage>,
    pub history: Mutex<HistoryStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let history = if config.history.enabled {
            HistoryStore::load(&config.history.path, config.history.capacity)
        } else {
            tracing::info!("History persistence disabled");
            HistoryStore::in_memory(config.history.capacity)
        };
        tracing::info!("Loaded {} history entries", history.len());

        Self {
            target_language: RwLock::new(config.translator.to_lang),
            history: Mutex::new(history),
            config,
        }
    }
}
