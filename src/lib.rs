//! Stylepipe - Configuration layer for CSS post-processing pipelines
//!
//! This library provides functionality to:
//! - Parse partial configuration records from `styl.toml` / `styl.json5`
//! - Merge them with built-in defaults into a canonical configuration
//! - Describe the resolved post-processing pipeline as an ordered plan

pub mod cli;
pub mod config;
pub mod init;
pub mod pipeline;
pub mod watch;
