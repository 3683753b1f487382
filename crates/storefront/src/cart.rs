//! Shopping cart store.
//!
//! The cart holds line items (a product snapshot plus a quantity) and hands
//! the order off to WhatsApp as a pre-encoded text message; there is no
//! checkout backend. Line quantities always stay within `[1, stock]` of the
//! referenced product: requesting more clamps to stock, requesting less
//! than one removes the line.

use thiserror::Error;

use organi_live_core::{Price, Product, ProductId};

/// Errors from cart operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The product has no stock to add.
    #[error("product {0} is out of stock")]
    OutOfStock(ProductId),

    /// No cart line references this product.
    #[error("product {0} is not in the cart")]
    LineNotFound(ProductId),

    /// The operation needs a non-empty cart.
    #[error("the cart is empty")]
    Empty,
}

/// A (product, quantity) pair held in the cart.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CartLine {
    /// Snapshot of the product at add time.
    pub product: Product,
    /// Units ordered. Always in `[1, product.stock]`.
    pub quantity: u32,
}

impl CartLine {
    /// Price × quantity for this line.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// The shopping cart.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The current line items, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` units of a product, creating or incrementing its
    /// line. The resulting quantity is clamped to the product's stock.
    ///
    /// # Errors
    ///
    /// Returns `CartError::OutOfStock` if the product has no stock.
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<(), CartError> {
        if product.is_out_of_stock() {
            return Err(CartError::OutOfStock(product.id));
        }
        let quantity = quantity.max(1);

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity).min(product.stock);
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: quantity.min(product.stock),
            });
        }
        Ok(())
    }

    /// Set a line's quantity. A requested quantity above stock clamps to
    /// stock; a requested quantity below 1 removes the line.
    ///
    /// # Errors
    ///
    /// Returns `CartError::LineNotFound` if the product has no line.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) -> Result<(), CartError> {
        let Some(pos) = self.lines.iter().position(|l| l.product.id == id) else {
            return Err(CartError::LineNotFound(id));
        };

        if quantity < 1 {
            self.lines.remove(pos);
        } else if let Some(line) = self.lines.get_mut(pos) {
            line.quantity = quantity.min(line.product.stock);
        }
        Ok(())
    }

    /// Remove a line unconditionally. Removing an absent line is a no-op.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.retain(|l| l.product.id != id);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Quantity of a product currently in the cart (0 if absent). Drives
    /// the "En carrito" badge on the product grid.
    #[must_use]
    pub fn item_quantity(&self, id: ProductId) -> u32 {
        self.lines
            .iter()
            .find(|l| l.product.id == id)
            .map_or(0, |l| l.quantity)
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of price × quantity over all lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.lines
            .iter()
            .fold(Price::cop(0), |total, line| total + line.subtotal())
    }

    /// Render the order summary handed off to WhatsApp.
    ///
    /// The rendering is deterministic: the same cart state always produces
    /// the same message.
    #[must_use]
    pub fn order_message(&self) -> String {
        let mut message = String::from("¡Hola! Quiero hacer el siguiente pedido:\n\n");

        for line in &self.lines {
            message.push_str(&format!(
                "• {}\n  Cantidad: {} x {} = {}\n",
                line.product.name,
                line.quantity,
                line.product.price,
                line.subtotal()
            ));
        }

        message.push_str(&format!(
            "\nTotal: {} ({} productos)",
            self.total_price(),
            self.total_items()
        ));
        message
    }

    /// Build the `wa.me` deep link carrying the order summary.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Empty` if there is nothing to order.
    pub fn whatsapp_url(&self, number: &str) -> Result<String, CartError> {
        if self.is_empty() {
            return Err(CartError::Empty);
        }
        Ok(format!(
            "https://wa.me/{number}?text={}",
            urlencoding::encode(&self.order_message())
        ))
    }
}
