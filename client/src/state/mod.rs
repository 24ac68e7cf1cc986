//! Reactive state owned by the app root and provided via context.

pub mod auth;
