// Domain layer: report models and ports. No output or config concerns here.

pub mod model;
pub mod ports;
