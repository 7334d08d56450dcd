mod asset;
pub mod document;

pub use asset::*;
pub use document::Document;
