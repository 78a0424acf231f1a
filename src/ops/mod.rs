pub mod sections;

pub use sections::*;
