pub mod export;
pub mod index;
pub mod json;
pub mod round_status;
pub mod text;
