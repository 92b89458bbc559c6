// Adapters layer: concrete implementations for external systems (generation provider, http server).

pub mod http;
pub mod openrouter;
