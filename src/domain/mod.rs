// Domain layer: course model and ports (interfaces). No dependencies beyond std/serde.

pub mod model;
pub mod ports;
