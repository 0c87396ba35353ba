// Domain layer: entities and ports. The record service in `core` is the only owner of state.

pub mod model;
pub mod ports;
