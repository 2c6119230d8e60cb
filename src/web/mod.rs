//! Web layer serving the browser form.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`locale`] - Per-language UI text

pub mod handlers;
pub mod locale;

pub use locale::Locale;
