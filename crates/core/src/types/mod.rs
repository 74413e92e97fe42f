//! Core types for Pure Angan.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod inquiry;
pub mod price;
pub mod rating;
pub mod slug;

pub use email::{Email, EmailError};
pub use id::*;
pub use inquiry::InquiryType;
pub use price::{PriceError, StartingPrice};
pub use rating::{Rating, RatingError, STAR_COUNT};
pub use slug::{Slug, SlugError};
