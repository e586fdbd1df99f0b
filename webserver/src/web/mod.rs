//! Web layer: HTTP route handlers

pub mod handlers;
