pub mod db;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod service;

/// Access token lifetime in seconds.
pub const ACCESS_TOKEN_EXP: usize = 24 * 60 * 60;
