//! Book recommendation browser.
//!
//! Serves a small page listing sample books; picking one fetches
//! recommendations for it from a remote service and shows the outcome.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
