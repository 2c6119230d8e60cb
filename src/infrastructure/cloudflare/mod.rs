//! Cloudflare API integration.

pub mod client;

pub use client::{CloudflareClient, DEFAULT_API_BASE};
