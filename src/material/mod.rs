mod alpha_mode;
mod material;

pub use alpha_mode::*;
pub use material::*;
