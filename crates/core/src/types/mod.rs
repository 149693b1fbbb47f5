//! Core types for SnusIdea.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod theme;

pub use id::*;
pub use price::{CurrencyCode, Price};
pub use theme::{Theme, ThemeParseError};
