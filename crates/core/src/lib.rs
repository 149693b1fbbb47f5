//! SnusIdea Core - Shared types library.
//!
//! This crate provides common types used across all SnusIdea components:
//! - `storefront` - Cart pricing, navigation theme and carousel state engines
//! - `cli` - Command-line tools for inspecting those engines
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no rendering, no event
//! handling. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices and themes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
