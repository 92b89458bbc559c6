use crate::domain::model::RoastRequest;
use crate::utils::error::ProviderError;
use async_trait::async_trait;

/// An external text-generation backend. One call, one attempt.
#[async_trait]
pub trait RoastProvider: Send + Sync {
    async fn generate(&self, request: &RoastRequest) -> Result<String, ProviderError>;

    /// 是否已啟用且有憑證；僅用於健康檢查與日誌。
    fn is_enabled(&self) -> bool;
}

/// Source of randomness for the fallback selection.
pub trait RandomSource: Send + Sync {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;

    /// Uniform number in `[0, 1)`.
    fn roll(&self) -> f64;
}
