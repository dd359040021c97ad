pub mod auth;
pub mod booking;
pub mod certificate;
pub mod crypto;
pub mod log;
pub mod rating;
pub mod slot;
pub mod subject;
pub mod user;
