use crate::core::contextual::contextual_roasts;
use crate::core::pool::pool_for;
use crate::core::random::ThreadRandom;
use crate::domain::model::{Intensity, RoastOutcome, RoastRequest, RoastSource};
use crate::domain::ports::{RandomSource, RoastProvider};
use std::sync::Arc;

/// Returned when nothing more specific can be said, e.g. for an unparsable body.
pub const GENERIC_ROAST: &str = "Your financial decisions speak for themselves.";

/// A roll strictly above this value swaps the pool roast for a contextual one (30%).
pub const CONTEXTUAL_THRESHOLD: f64 = 0.7;

impl RoastOutcome {
    /// The invariant roast used when a request cannot be handled normally.
    pub fn guard() -> Self {
        Self {
            roast: GENERIC_ROAST.to_string(),
            source: RoastSource::Guard,
        }
    }
}

/// Roast selection policy: provider first, then pool / contextual fallback.
///
/// `roast` never fails. Provider errors are logged and swallowed, and the
/// fallback path is pure apart from the injected random source.
pub struct RoastEngine {
    provider: Option<Arc<dyn RoastProvider>>,
    random: Arc<dyn RandomSource>,
}

impl RoastEngine {
    pub fn new(provider: Arc<dyn RoastProvider>, random: Arc<dyn RandomSource>) -> Self {
        Self {
            provider: Some(provider),
            random,
        }
    }

    /// Engine with no provider at all; every roast comes from the fallback path.
    pub fn fallback_only(random: Arc<dyn RandomSource>) -> Self {
        Self {
            provider: None,
            random,
        }
    }

    pub fn provider_enabled(&self) -> bool {
        self.provider.as_ref().is_some_and(|p| p.is_enabled())
    }

    pub async fn roast(&self, request: &RoastRequest) -> RoastOutcome {
        if let Some(provider) = &self.provider {
            match provider.generate(request).await {
                Ok(roast) => {
                    tracing::debug!("🤖 Provider roast for intensity={}", request.intensity);
                    return RoastOutcome {
                        roast,
                        source: RoastSource::Provider,
                    };
                }
                Err(e) if e.is_call_failure() => {
                    tracing::warn!("⚠️ Provider call failed, using fallback: {}", e);
                }
                Err(e) => {
                    tracing::debug!("Provider skipped: {}", e);
                }
            }
        }

        self.fallback(request)
    }

    /// Deterministic given the random source.
    pub fn fallback(&self, request: &RoastRequest) -> RoastOutcome {
        select_fallback(request, self.random.as_ref())
    }
}

impl Default for RoastEngine {
    fn default() -> Self {
        Self::fallback_only(Arc::new(ThreadRandom))
    }
}

pub fn select_fallback(request: &RoastRequest, random: &dyn RandomSource) -> RoastOutcome {
    let pool = pool_for(request.intensity);
    let pooled = pool[random.pick(pool.len())];

    // fun 強度只用通用句，不做帶數字的吐槽
    if request.intensity != Intensity::Fun && random.roll() > CONTEXTUAL_THRESHOLD {
        let mut candidates = contextual_roasts(request);
        let index = random.pick(candidates.len());
        return RoastOutcome {
            roast: std::mem::take(&mut candidates[index]),
            source: RoastSource::Contextual,
        };
    }

    RoastOutcome {
        roast: pooled.to_string(),
        source: RoastSource::Pool,
    }
}
