pub mod mapping;
pub mod translit;
pub mod unicode;

pub use translit::{convert, convert_to_bytes};
