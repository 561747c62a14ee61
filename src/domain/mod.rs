// Domain layer: transient form values and the ports (document, clock) the guard talks to.

pub mod model;
pub mod ports;
