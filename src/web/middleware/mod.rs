//! Console-specific middleware.

pub mod web_auth;
