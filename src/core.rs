pub mod error;
pub mod weight;

pub use error::ConstructionError;
pub use weight::Weight;
