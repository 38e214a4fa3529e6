pub mod types;
pub mod utils;
pub mod warning;

pub use types::*;
pub use utils::*;
pub use warning::*;
