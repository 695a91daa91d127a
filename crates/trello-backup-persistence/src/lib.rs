pub mod serialization;
pub mod store;

pub use serialization::*;
pub use store::*;
