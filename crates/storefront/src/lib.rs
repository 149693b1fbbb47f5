//! SnusIdea Storefront library.
//!
//! Derived view state for the marketing storefront, decoupled from any
//! rendering surface. Every engine is a pure transition: old state plus an
//! event yields a new state, so the whole crate is testable without a
//! browser.
//!
//! # Modules
//!
//! - [`cart`] - Line items, free-shipping totals and the cart drawer view
//! - [`theme`] - Scroll-driven navigation theme detection
//! - [`carousel`] - Horizontal drag bounds with elastic resistance
//! - [`overlay`] - Cart drawer, search overlay and mobile menu state
//! - [`search`] - Search suggestions and catalog filtering
//! - [`pointer`] - Magnetic hover offsets
//! - [`catalog`] - Static product catalog, cart seed and page layout
//! - [`config`] - Environment-driven configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod carousel;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod overlay;
pub mod pointer;
pub mod search;
pub mod theme;

pub use error::{Result, StorefrontError};
