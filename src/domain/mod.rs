// Domain layer: screening data model and the backend port.

pub mod model;
pub mod ports;
