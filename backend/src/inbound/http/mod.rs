//! HTTP inbound adapter exposing REST endpoints.

pub mod banner;
pub mod error;
pub mod guests;
pub mod health;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod views;

pub use error::ApiResult;
