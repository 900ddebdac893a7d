//! Unit tests for configuration loading and precedence.
//!
//! - `helpers`: shared layer composition
//! - `precedence`: layer precedence and defaults
//! - `validation`: range and format checks
//! - `field_resolution`: derived values and token resolution

mod helpers;
mod validation;
