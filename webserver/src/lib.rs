//! HTTP surface of the menu catalog service
//!
//! Exposes catalog CRUD, promotional offers and the recipe search/import
//! path as a JSON API. All collaborators are injected so the router can be
//! driven in tests without a socket, a data file or the network.

pub mod config;
pub mod error;
pub mod state;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use config::{Args, ServerConfig};
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use webserver_impl::WebServer;
