//! Configuration module for the stylepipe resolver
//!
//! Provides types, shape checking, merging, and discovery for `styl.toml` /
//! `styl.json5` project configuration.

pub mod loader;
pub mod resolver;
pub mod schema;

pub use resolver::{check, is_valid, resolve, ShapeError};
pub use schema::*;
