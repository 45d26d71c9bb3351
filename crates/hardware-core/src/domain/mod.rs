//! Domain entities and value objects of the hardware store.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
