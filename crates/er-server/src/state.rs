//! Application state shared across all handlers.

use er_analyzer::EmotionAnalyzer;
use er_core::ServerConfig;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<EmotionAnalyzer>,
    pub config: Arc<ServerConfig>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self::with_analyzer(config, EmotionAnalyzer::default())
    }

    pub fn with_analyzer(config: ServerConfig, analyzer: EmotionAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}
