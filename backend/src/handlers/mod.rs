pub mod characters;
pub mod roast;

pub use characters::*;
pub use roast::*;
