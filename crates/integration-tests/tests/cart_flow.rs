//! Integration tests for the cart and the WhatsApp order handoff.

#![allow(clippy::unwrap_used)]

use organi_live_core::{Price, ProductId};
use organi_live_integration_tests::product;
use organi_live_storefront::cart::{Cart, CartError};

// ============================================================================
// Full Shopping Flow
// ============================================================================

#[test]
fn test_browse_add_adjust_order_flow() {
    let banano = product(1, "Banano Criollo", "Frutas", 3500, 20);
    let aguacate = product(2, "Aguacate Hass", "Frutas", 8000, 12);
    let tomate = product(3, "Tomate Chonto", "Verduras", 4200, 0);

    let mut cart = Cart::new();

    // sold-out products never enter the cart
    assert_eq!(cart.add(&tomate, 1), Err(CartError::OutOfStock(tomate.id)));

    cart.add(&banano, 3).unwrap();
    cart.add(&aguacate, 2).unwrap();
    cart.add(&banano, 1).unwrap();

    assert_eq!(cart.lines().len(), 2);
    assert_eq!(cart.item_quantity(banano.id), 4);
    assert_eq!(cart.total_items(), 6);
    assert_eq!(cart.total_price(), Price::cop(4 * 3500 + 2 * 8000));

    // the customer trims the order before sending it
    cart.update_quantity(banano.id, 2).unwrap();
    cart.remove(aguacate.id);

    let message = cart.order_message();
    assert!(message.starts_with("¡Hola! Quiero hacer el siguiente pedido:"));
    assert!(message.contains("• Banano Criollo"));
    assert!(message.contains("2 x $3.500 = $7.000"));
    assert!(message.contains("Total: $7.000 (2 productos)"));

    let url = cart.whatsapp_url("573222132187").unwrap();
    assert!(url.starts_with("https://wa.me/573222132187?text="));
    assert!(url.contains("%C2%A1Hola")); // "¡Hola" percent-encoded
}

#[test]
fn test_quantities_never_leave_stock_range() {
    let limon = product(5, "Limón Tahití", "Frutas", 5000, 8);
    let mut cart = Cart::new();

    cart.add(&limon, 50).unwrap();
    assert_eq!(cart.item_quantity(limon.id), 8);

    cart.update_quantity(limon.id, 3).unwrap();
    assert_eq!(cart.item_quantity(limon.id), 3);

    cart.update_quantity(limon.id, 0).unwrap();
    assert_eq!(cart.item_quantity(limon.id), 0);
    assert!(cart.is_empty());

    // the line is gone now, so further updates report it missing
    assert_eq!(
        cart.update_quantity(limon.id, 2),
        Err(CartError::LineNotFound(limon.id))
    );
}

#[test]
fn test_empty_cart_has_no_handoff() {
    let cart = Cart::new();
    assert_eq!(cart.whatsapp_url("573222132187"), Err(CartError::Empty));
    assert_eq!(cart.total_price(), Price::cop(0));
    assert_eq!(cart.item_quantity(ProductId::new(1)), 0);
}

#[test]
fn test_clear_resets_everything() {
    let mut cart = Cart::new();
    cart.add(&product(1, "Banano Criollo", "Frutas", 3500, 20), 2)
        .unwrap();
    cart.add(&product(4, "Cilantro", "Hierbas", 1500, 30), 1)
        .unwrap();

    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(cart.total_items(), 0);
}
