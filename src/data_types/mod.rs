pub mod category;
pub mod data;

pub use category::*;
pub use data::*;
