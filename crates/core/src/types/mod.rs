//! Core types for Desafio Cart.
//!
//! This module provides type-safe wrappers for cart domain concepts.

pub mod id;
pub mod item;
pub mod price;

pub use id::*;
pub use item::{CartItem, CartSummary, NewCartItem};
pub use price::{Price, PriceError};
