pub mod contextual;
pub mod policy;
pub mod pool;
pub mod random;

pub use crate::domain::model::{Intensity, RoastOutcome, RoastRequest, RoastResult, RoastSource};
pub use crate::domain::ports::{RandomSource, RoastProvider};
pub use crate::utils::error::Result;
