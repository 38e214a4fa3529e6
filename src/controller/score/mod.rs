pub mod data_service;
pub mod http_handlers;

pub use data_service::{AppState, get_data_for_leaderboard};
