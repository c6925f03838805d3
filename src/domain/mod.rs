// Domain layer: install layout, step outcomes and the ports the hook is built on.

pub mod model;
pub mod ports;
