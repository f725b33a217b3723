//! Cart line items.
//!
//! The field names here are the on-disk document format: a cart is persisted
//! as a JSON array of `{ "id", "title", "image_url", "price", "quantity" }`
//! objects, and must stay readable by anything that wrote that shape before.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// A product as offered to the cart, before it has a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCartItem {
    pub id: ProductId,
    pub title: String,
    pub image_url: String,
    pub price: Price,
}

impl NewCartItem {
    /// Create a new cart candidate.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        price: impl Into<Price>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_url: image_url.into(),
            price: price.into(),
        }
    }

    /// Turn this product into a cart line with the given quantity.
    #[must_use]
    pub fn with_quantity(self, quantity: u32) -> CartItem {
        CartItem {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity,
        }
    }
}

/// One product entry in the cart with its quantity.
///
/// A quantity of zero is a valid state: decrementing never removes the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub title: String,
    pub image_url: String,
    pub price: Price,
    pub quantity: u32,
}

impl CartItem {
    /// Price of this line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Aggregate figures for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CartSummary {
    /// Sum of all line quantities.
    pub item_count: u32,
    /// Sum of all line totals.
    pub subtotal: Price,
}

impl CartSummary {
    /// Compute the summary for a list of cart lines.
    #[must_use]
    pub fn from_items(items: &[CartItem]) -> Self {
        Self {
            item_count: items
                .iter()
                .fold(0_u32, |acc, item| acc.saturating_add(item.quantity)),
            subtotal: items.iter().map(CartItem::line_total).sum(),
        }
    }
}
