pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::ServeArgs;
pub use crate::config::RoastConfig;

pub use crate::adapters::http::{router, router_with_body_limit, AppState};
pub use crate::adapters::openrouter::{OpenRouterProvider, OpenRouterSettings};
pub use crate::core::policy::{RoastEngine, GENERIC_ROAST};
pub use crate::core::random::{SeededRandom, ThreadRandom};
pub use crate::domain::model::{Intensity, RoastOutcome, RoastRequest, RoastResult, RoastSource};
pub use crate::utils::error::{ProviderError, Result, RoastError};
