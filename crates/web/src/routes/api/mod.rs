//! JSON API route handlers.

pub mod login;
