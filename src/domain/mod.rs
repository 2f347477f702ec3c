// Domain layer: models, typed tables and ports. Nothing here touches the filesystem.

pub mod model;
pub mod ports;
pub mod reference;
pub mod tables;
