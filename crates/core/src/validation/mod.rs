//! Shipping address validation.
//!
//! Provides the outcome types, the configurable shipping rule evaluator, and
//! fallback error messages for built-in form validators. All pure logic.

pub mod messages;
pub mod outcome;
pub mod shipping;
