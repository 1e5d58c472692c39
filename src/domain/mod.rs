// Domain layer: wire-level types and the port seam. Serial specifics live in adapters.

pub mod model;
pub mod ports;
