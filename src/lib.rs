//! joke-service: AI-generated jokes over HTTP with periodic webhook publishing.
pub mod config;
pub mod error;
pub mod handlers;
pub mod observability;
pub mod services;
pub mod startup;
