// Domain layer: case-count models, the source layout, and the ports the pipeline depends on.

pub mod model;
pub mod ports;
pub mod schema;
