//! Pure Angan Core - Shared domain types.
//!
//! This crate provides the types shared by the storefront and its tests:
//! - Type-safe identifiers for catalog rows
//! - Validated values (slugs, emails, starting prices, ratings)
//! - The inquiry type tag written with every lead
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Rows read
//! from the hosted table API deserialize straight into these types, so an
//! invalid value is rejected at the edge instead of deep inside a handler.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, slugs, emails, prices, ratings

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
