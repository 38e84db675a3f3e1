//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate rules and router plumbing from page markup to
//! improve reuse and testability.

pub mod navigate;
pub mod validation;
