// Domain layer: trigger payloads, the branch plan and the CI client port.

pub mod model;
pub mod plan;
pub mod ports;
