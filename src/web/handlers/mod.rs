//! HTML page handlers.

pub mod page;

pub use page::page_handler;
