//! Mock Login web library.
//!
//! This crate provides the login page server as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
mod filters;
pub mod middleware;
pub mod routes;
pub mod state;

pub use routes::app;
