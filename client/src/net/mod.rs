//! Client-side service boundaries.

pub mod auth;
