//! Custom extractors for Axum handlers.

pub mod client_ip;
pub mod json;

pub use client_ip::{ClientIp, TrustProxy, resolve_client_ip};
pub use json::{AppJson, AppQuery};
