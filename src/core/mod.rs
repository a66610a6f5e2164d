// src/core/mod.rs

pub mod names;
pub mod sanitize;

pub use names::{normalize_name, NameResolver};
