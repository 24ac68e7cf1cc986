//! Network layer: REST helpers for the server's auth API.

pub mod api;
