// Domain layer: models and ports. No console or CLI concerns here.

pub mod model;
pub mod ports;
