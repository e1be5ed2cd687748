//! Domain logic for form validation checks.
//!
//! Holds the address model, the shipping rule evaluator and its outcome
//! types, and the username / slug availability lookups. Nothing here
//! performs I/O.

pub mod address;
pub mod availability;
pub mod error;
pub mod validation;
