//! Shared presentational components.

pub mod nav;
