// Domain layer: catalog records and the ports adapters plug into.

pub mod model;
pub mod ports;
