pub mod field;
pub mod item;

pub use field::*;
pub use item::*;
