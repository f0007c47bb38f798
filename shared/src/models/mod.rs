pub mod character;
pub mod roast;

pub use character::*;
pub use roast::*;
