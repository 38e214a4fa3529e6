pub mod args;
pub mod cache;
pub mod controller;
pub mod error;
pub mod feed;
pub mod model;
pub mod roster;
pub mod score;
pub mod view;

pub use error::PoolError;
pub use score::{build_leaderboard, load_leaderboard};
