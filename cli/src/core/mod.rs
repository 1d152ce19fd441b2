//! # gzembed Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces used by every command:
//! - `config`: layered configuration and path resolution
//! - `error`: the embedder's error taxonomy and `Result` alias
//!
//! ```rust
//! use crate::core::config; // For resolving input and output paths
//! use crate::core::error::{EmbedError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
