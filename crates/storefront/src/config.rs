//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; unset variables fall back to the values the
//! storefront ships with.
//!
//! - `SNUSIDEA_FREE_SHIPPING_THRESHOLD` - Subtotal for free shipping (default: 50.00)
//! - `SNUSIDEA_CURRENCY` - ISO 4217 display currency (default: USD)
//! - `SNUSIDEA_NAV_PROBE_Y` - Navigation probe offset in px (default: 60)
//! - `SNUSIDEA_CAROUSEL_PADDING` - Carousel drag padding in px (default: 32)
//! - `SNUSIDEA_CAROUSEL_ELASTICITY` - Overscroll resistance in [0, 1] (default: 0.1)
//! - `SNUSIDEA_MOBILE_BREAKPOINT` - Viewport width below which the cart is a bottom sheet (default: 768)

use std::str::FromStr;

use rust_decimal::Decimal;
use snusidea_core::CurrencyCode;
use thiserror::Error;

use crate::carousel::{DEFAULT_ELASTICITY, DEFAULT_PADDING};
use crate::cart::DEFAULT_FREE_SHIPPING_THRESHOLD;
use crate::overlay::DEFAULT_MOBILE_BREAKPOINT;
use crate::theme::DEFAULT_PROBE_Y;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Environment variable {0} out of range: {1}")]
    OutOfRange(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Subtotal at which shipping becomes free
    pub free_shipping_threshold: Decimal,
    /// Currency used when formatting prices
    pub currency: CurrencyCode,
    /// Viewport y coordinate sampled for the navigation theme
    pub nav_probe_y: f64,
    /// Extra drag room past the last carousel card
    pub carousel_padding: f64,
    /// Fraction of overscroll that is applied while dragging out of bounds
    pub carousel_elasticity: f64,
    /// Viewport width below which mobile layouts apply
    pub mobile_breakpoint: f64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: DEFAULT_FREE_SHIPPING_THRESHOLD,
            currency: CurrencyCode::default(),
            nav_probe_y: DEFAULT_PROBE_Y,
            carousel_padding: DEFAULT_PADDING,
            carousel_elasticity: DEFAULT_ELASTICITY,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed, or
    /// if its value is outside the accepted range.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`StorefrontConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let free_shipping_threshold = parse_or(
            &lookup,
            "SNUSIDEA_FREE_SHIPPING_THRESHOLD",
            defaults.free_shipping_threshold,
        )?;
        if free_shipping_threshold <= Decimal::ZERO {
            return Err(ConfigError::OutOfRange(
                "SNUSIDEA_FREE_SHIPPING_THRESHOLD".to_string(),
                format!("must be greater than zero (got {free_shipping_threshold})"),
            ));
        }

        let currency = parse_or(&lookup, "SNUSIDEA_CURRENCY", defaults.currency)?;
        let nav_probe_y = parse_finite_or(&lookup, "SNUSIDEA_NAV_PROBE_Y", defaults.nav_probe_y)?;
        let carousel_padding = parse_finite_or(
            &lookup,
            "SNUSIDEA_CAROUSEL_PADDING",
            defaults.carousel_padding,
        )?;

        let carousel_elasticity = parse_finite_or(
            &lookup,
            "SNUSIDEA_CAROUSEL_ELASTICITY",
            defaults.carousel_elasticity,
        )?;
        if !(0.0..=1.0).contains(&carousel_elasticity) {
            return Err(ConfigError::OutOfRange(
                "SNUSIDEA_CAROUSEL_ELASTICITY".to_string(),
                format!("must be between 0 and 1 (got {carousel_elasticity})"),
            ));
        }

        let mobile_breakpoint = parse_finite_or(
            &lookup,
            "SNUSIDEA_MOBILE_BREAKPOINT",
            defaults.mobile_breakpoint,
        )?;

        Ok(Self {
            free_shipping_threshold,
            currency,
            nav_probe_y,
            carousel_padding,
            carousel_elasticity,
            mobile_breakpoint,
        })
    }
}

/// Parse an optional variable, falling back to `default` when unset.
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}

/// Parse an optional `f64` variable and reject NaN or infinite values.
fn parse_finite_or<F>(lookup: &F, key: &str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = parse_or(lookup, key, default)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be a finite number (got {value})"),
        ))
    }
}
