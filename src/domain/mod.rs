// Domain layer: models and ports (interfaces). No file system or process access here.

pub mod model;
pub mod ports;
