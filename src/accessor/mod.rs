// Accessor sizing and decoding

pub mod component;
pub mod decoder;

pub use component::*;
pub use decoder::{AccessorLayout, AccessorView};
