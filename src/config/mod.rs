#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::ServeArgs;
pub use toml_config::RoastConfig;

use crate::adapters::http::AppState;
use crate::adapters::openrouter::OpenRouterProvider;
use crate::core::policy::RoastEngine;
use crate::core::random::ThreadRandom;
use crate::domain::ports::RandomSource;
use crate::utils::error::Result;
use std::sync::Arc;

impl RoastConfig {
    /// 依配置組裝引擎：OpenRouter provider 加上指定的隨機來源
    pub fn build_engine(&self, random: Arc<dyn RandomSource>) -> Result<RoastEngine> {
        let provider = OpenRouterProvider::new(self.provider_settings())?;
        Ok(RoastEngine::new(Arc::new(provider), random))
    }

    pub fn build_state(&self) -> Result<Arc<AppState>> {
        let engine = self.build_engine(Arc::new(ThreadRandom))?;
        Ok(Arc::new(AppState::new(engine)))
    }
}
