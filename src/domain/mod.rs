// Domain layer: request/result models and the ports the roast engine depends on.

pub mod model;
pub mod ports;
