// Domain layer: redirect pairs, check results and the ports the core depends on.

pub mod model;
pub mod ports;
