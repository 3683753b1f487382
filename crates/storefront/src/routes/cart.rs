//! Cart route handlers.
//!
//! The cart lives server-side in [`AppState`]; every mutation answers with
//! the full cart view so the client can re-render without a second fetch.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use organi_live_core::ProductId;

use crate::cart::{Cart, CartLine};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub product_id: ProductId,
    pub name: String,
    pub category: Option<String>,
    pub quantity: u32,
    pub stock: u32,
    pub unit_price: String,
    pub subtotal: String,
    pub image: Option<String>,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product.id,
            name: line.product.name.clone(),
            category: line.product.category.clone(),
            quantity: line.quantity,
            stock: line.product.stock,
            unit_price: line.product.price.to_string(),
            subtotal: line.subtotal().to_string(),
            image: line.product.image.clone(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total_items: u32,
    pub total_price: String,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            total_items: cart.total_items(),
            total_price: cart.total_price().to_string(),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i64,
    pub quantity: Option<u32>,
}

/// Update quantity form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: i64,
    pub quantity: u32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i64,
}

/// WhatsApp handoff payload.
#[derive(Debug, Serialize)]
pub struct WhatsAppHandoff {
    /// Deep link opening the chat with the order pre-filled.
    pub url: String,
    /// The plain-text order summary carried by the link.
    pub message: String,
}

/// Show the cart.
///
/// GET /cart
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    Json(state.with_cart(|cart| CartView::from(cart)))
}

/// Add a product to the cart.
///
/// POST /cart/add
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(form): Json<AddToCartForm>,
) -> Result<Json<CartView>> {
    let id = ProductId::new(form.product_id);
    let product = state
        .catalog()
        .find(id)
        .ok_or_else(|| AppError::NotFound(format!("producto {id}")))?;

    state.with_cart_mut(|cart| cart.add(&product, form.quantity.unwrap_or(1)))?;
    Ok(Json(state.with_cart(|cart| CartView::from(cart))))
}

/// Set a cart line's quantity.
///
/// POST /cart/update
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Json(form): Json<UpdateCartForm>,
) -> Result<Json<CartView>> {
    let id = ProductId::new(form.product_id);
    state.with_cart_mut(|cart| cart.update_quantity(id, form.quantity))?;
    Ok(Json(state.with_cart(|cart| CartView::from(cart))))
}

/// Remove a cart line.
///
/// POST /cart/remove
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Json(form): Json<RemoveFromCartForm>,
) -> Json<CartView> {
    state.with_cart_mut(|cart| cart.remove(ProductId::new(form.product_id)));
    Json(state.with_cart(|cart| CartView::from(cart)))
}

/// Empty the cart.
///
/// POST /cart/clear
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Json<CartView> {
    state.with_cart_mut(Cart::clear);
    Json(state.with_cart(|cart| CartView::from(cart)))
}

/// Build the WhatsApp order handoff link.
///
/// GET /cart/whatsapp
#[instrument(skip(state))]
pub async fn whatsapp(State(state): State<AppState>) -> Result<Json<WhatsAppHandoff>> {
    let number = &state.config().contact.whatsapp_number;
    let handoff = state.with_cart(|cart| {
        cart.whatsapp_url(number).map(|url| WhatsAppHandoff {
            url,
            message: cart.order_message(),
        })
    })?;
    Ok(Json(handoff))
}
