pub mod color;

pub mod palette;

pub mod theme;

pub mod export;

pub mod serialization;

mod error;
pub use error::{Error, Result};

mod utils;
pub use utils::generate_id;
