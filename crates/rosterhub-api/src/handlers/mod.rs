//! HTTP request handlers.

pub mod auth;
pub mod health;
pub mod member;
pub mod record;
pub mod roster;
