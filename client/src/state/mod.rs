//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is app-wide and lives in context; `login` is page-local form
//! state owned by the login page.

pub mod login;
pub mod session;
