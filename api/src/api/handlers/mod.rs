//! HTTP request handlers.
//!
//! Handlers return [`crate::errors::Error`], which converts to the
//! appropriate HTTP status code and a user-safe body.

pub mod users;
