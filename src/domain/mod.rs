// Domain layer: portfolio records and the ports the site builder depends on.

pub mod model;
pub mod ports;
