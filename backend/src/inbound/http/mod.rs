//! HTTP inbound adapter exposing the admin pages and the JSON API.

pub mod admins;
pub mod auth;
pub mod error;
pub mod health;
pub mod pages;
pub mod posts;
pub mod posts_dto;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod verification;

pub use error::ApiResult;
