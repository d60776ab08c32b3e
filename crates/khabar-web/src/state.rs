use std::sync::Arc;

use khabar_core::ai::Summarizer;
use khabar_core::news::NewsSource;
use khabar_core::AppConfig;

pub struct AppState {
    pub config: Arc<AppConfig>,
    pub news: Arc<dyn NewsSource>,
    pub summarizer: Arc<Summarizer>,
}
