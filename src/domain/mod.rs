// Domain layer: upstream data model and the recommender port.

pub mod lenient;
pub mod model;
pub mod ports;
