//! Integration tests for the order lifecycle.
//!
//! These walk the full path the shop takes an order through: cart to
//! checkout, inventory coupling, remittance reconciliation and shipping.

#![allow(clippy::unwrap_used)]

use lychee_market_core::{OrderStatus, Phone, ProductId};
use lychee_market_engine::Cart;
use lychee_market_integration_tests::{customer, sample_engine, shipping};
use rust_decimal::Decimal;

// =============================================================================
// Checkout and Inventory Coupling
// =============================================================================

#[test]
fn test_worked_example_from_shop() {
    // Product 1: price 25, stock 100, sold 250. Order 3 units, discount 20.
    let engine = sample_engine();
    let mask = engine.product(&ProductId::new("1")).unwrap();

    let mut cart = Cart::new();
    cart.add_line(&mask, "白色", 3).unwrap();

    let order = engine
        .create_order(
            &mut cart,
            Decimal::from(20),
            customer("Amy"),
            shipping("Amy", "0912345678"),
        )
        .unwrap();

    assert_eq!(order.status, OrderStatus::PendingCheck);
    assert_eq!(order.subtotal, Decimal::from(75));
    assert_eq!(order.final_amount, Decimal::from(55));

    let mask = engine.product(&ProductId::new("1")).unwrap();
    assert_eq!(mask.stock, 97);
    assert_eq!(mask.sold, 253);
}

#[test]
fn test_checkout_drains_cart_but_failed_checkout_keeps_it() {
    let engine = sample_engine();
    let mask = engine.product(&ProductId::new("1")).unwrap();

    let mut empty = Cart::new();
    assert!(
        engine
            .create_order(
                &mut empty,
                Decimal::from(20),
                customer("Amy"),
                shipping("Amy", "0912345678"),
            )
            .is_err()
    );

    let mut cart = Cart::new();
    cart.add_line(&mask, "白色", 1).unwrap();
    engine
        .create_order(
            &mut cart,
            Decimal::from(20),
            customer("Amy"),
            shipping("Amy", "0912345678"),
        )
        .unwrap();
    assert!(cart.is_empty());
}

#[test]
fn test_multi_product_order_adjusts_each_product_once() {
    let engine = sample_engine();
    let mask = engine.product(&ProductId::new("1")).unwrap();
    let tea = engine.product(&ProductId::new("3")).unwrap();

    let mut cart = Cart::new();
    cart.add_line(&mask, "白色", 2).unwrap();
    cart.add_line(&mask, "黑色", 3).unwrap();
    cart.add_line(&tea, "紅色(紅茶)", 4).unwrap();

    engine
        .create_order(
            &mut cart,
            Decimal::from(20),
            customer("Amy"),
            shipping("Amy", "0912345678"),
        )
        .unwrap();

    let mask = engine.product(&ProductId::new("1")).unwrap();
    assert_eq!(mask.stock, 95); // 100 - (2 + 3)
    assert_eq!(mask.sold, 255);

    let tea = engine.product(&ProductId::new("3")).unwrap();
    assert_eq!(tea.stock, 196);
    assert_eq!(tea.sold, 504);
}

#[test]
fn test_oversell_records_order_and_goes_negative() {
    let engine = sample_engine();
    let eye_mask = engine.product(&ProductId::new("2")).unwrap();
    assert_eq!(eye_mask.stock, 45);

    let mut cart = Cart::new();
    cart.add_line(&eye_mask, "無香", 60).unwrap();

    let order = engine
        .create_order(
            &mut cart,
            Decimal::from(20),
            customer("Amy"),
            shipping("Amy", "0912345678"),
        )
        .unwrap();

    // The order exists and the ledger counted the sale; stock is negative
    // until the operator reconciles it.
    assert_eq!(engine.order(&order.id).unwrap().items[0].quantity, 60);
    let eye_mask = engine.product(&ProductId::new("2")).unwrap();
    assert_eq!(eye_mask.stock, -15);
    assert_eq!(eye_mask.sold, 140);
}

#[test]
fn test_deleted_product_still_yields_order() {
    let engine = sample_engine();
    let mask = engine.product(&ProductId::new("1")).unwrap();

    let mut cart = Cart::new();
    cart.add_line(&mask, "白色", 2).unwrap();
    engine.delete_product(&ProductId::new("1"));

    let order = engine
        .create_order(
            &mut cart,
            Decimal::from(20),
            customer("Amy"),
            shipping("Amy", "0912345678"),
        )
        .unwrap();

    assert_eq!(engine.orders().len(), 1);
    assert_eq!(order.subtotal, Decimal::from(50));
    // Other products' inventory is untouched.
    assert_eq!(engine.product(&ProductId::new("3")).unwrap().stock, 200);
}

// =============================================================================
// Status Machine
// =============================================================================

#[test]
fn test_verify_then_ship_terminates_with_timestamp() {
    let engine = sample_engine();
    let mask = engine.product(&ProductId::new("1")).unwrap();
    let mut cart = Cart::new();
    cart.add_line(&mask, "白色", 1).unwrap();

    let order = engine
        .create_order(
            &mut cart,
            Decimal::from(20),
            customer("Amy"),
            shipping("Amy", "0912345678"),
        )
        .unwrap();

    assert!(engine.verify_payment(&order.id));
    assert!(engine.mark_shipped(&order.id));

    let shipped = engine.order(&order.id).unwrap();
    assert_eq!(shipped.status, OrderStatus::Shipped);
    assert!(shipped.shipped_at.is_some());
    assert!(shipped.shipped_at.unwrap() >= shipped.created_at);
}

#[test]
fn test_ship_before_verify_leaves_pending() {
    let engine = sample_engine();
    let mask = engine.product(&ProductId::new("1")).unwrap();
    let mut cart = Cart::new();
    cart.add_line(&mask, "白色", 1).unwrap();

    let order = engine
        .create_order(
            &mut cart,
            Decimal::from(20),
            customer("Amy"),
            shipping("Amy", "0912345678"),
        )
        .unwrap();

    assert!(!engine.mark_shipped(&order.id));
    let stored = engine.order(&order.id).unwrap();
    assert_eq!(stored.status, OrderStatus::PendingCheck);
    assert!(stored.shipped_at.is_none());
}

#[test]
fn test_double_transitions_are_idempotent() {
    let engine = sample_engine();
    let mask = engine.product(&ProductId::new("1")).unwrap();
    let mut cart = Cart::new();
    cart.add_line(&mask, "白色", 1).unwrap();

    let order = engine
        .create_order(
            &mut cart,
            Decimal::from(20),
            customer("Amy"),
            shipping("Amy", "0912345678"),
        )
        .unwrap();

    assert!(engine.verify_payment(&order.id));
    assert!(!engine.verify_payment(&order.id));
    assert_eq!(engine.order(&order.id).unwrap().status, OrderStatus::Paid);

    assert!(engine.mark_shipped(&order.id));
    assert!(!engine.mark_shipped(&order.id));
    assert_eq!(engine.order(&order.id).unwrap().status, OrderStatus::Shipped);

    // Verify after shipping never regresses the order.
    assert!(!engine.verify_payment(&order.id));
    assert_eq!(engine.order(&order.id).unwrap().status, OrderStatus::Shipped);
}

#[test]
fn test_unknown_order_ids_are_tolerated() {
    let engine = sample_engine();
    let ghost = lychee_market_core::OrderId::new("stale-dashboard-ref");
    assert!(!engine.verify_payment(&ghost));
    assert!(!engine.mark_shipped(&ghost));
}

// =============================================================================
// Order History
// =============================================================================

#[test]
fn test_order_history_by_phone_newest_first() {
    let engine = sample_engine();
    let mask = engine.product(&ProductId::new("1")).unwrap();
    let tea = engine.product(&ProductId::new("3")).unwrap();

    for (product, option, phone) in [
        (&mask, "白色", "0912345678"),
        (&tea, "紅色(紅茶)", "0987654321"),
        (&mask, "黑色", "0912345678"),
    ] {
        let mut cart = Cart::new();
        cart.add_line(product, option, 1).unwrap();
        engine
            .create_order(
                &mut cart,
                Decimal::from(20),
                customer("Amy"),
                shipping("Amy", phone),
            )
            .unwrap();
    }

    let phone = Phone::parse("0912345678").unwrap();
    let history = engine.orders_for(&phone);
    assert_eq!(history.len(), 2);
    assert!(history[0].created_at >= history[1].created_at);
    assert!(history.iter().all(|o| o.shipping.phone == phone));
}

#[test]
fn test_orders_by_status_filter() {
    let engine = sample_engine();
    let mask = engine.product(&ProductId::new("1")).unwrap();

    let mut ids = Vec::new();
    for _ in 0..3 {
        let mut cart = Cart::new();
        cart.add_line(&mask, "白色", 1).unwrap();
        ids.push(
            engine
                .create_order(
                    &mut cart,
                    Decimal::from(20),
                    customer("Amy"),
                    shipping("Amy", "0912345678"),
                )
                .unwrap()
                .id,
        );
    }

    engine.verify_payment(&ids[0]);
    engine.verify_payment(&ids[1]);
    engine.mark_shipped(&ids[0]);

    assert_eq!(engine.orders_by_status(OrderStatus::PendingCheck).len(), 1);
    assert_eq!(engine.orders_by_status(OrderStatus::Paid).len(), 1);
    assert_eq!(engine.orders_by_status(OrderStatus::Shipped).len(), 1);
}

// =============================================================================
// Serialization Boundary
// =============================================================================

#[test]
fn test_order_serializes_with_wire_field_names() {
    let engine = sample_engine();
    let mask = engine.product(&ProductId::new("1")).unwrap();
    let mut cart = Cart::new();
    cart.add_line(&mask, "白色", 3).unwrap();

    let order = engine
        .create_order(
            &mut cart,
            Decimal::from(20),
            customer("Amy"),
            shipping("Amy", "0912345678"),
        )
        .unwrap();

    let json = serde_json::to_value(&order).unwrap();
    assert_eq!(json["status"], "pending_check");
    assert_eq!(json["final_amount"], "55");
    assert_eq!(json["items"][0]["quantity"], 3);
    assert_eq!(json["shipping"]["phone"], "0912345678");
    // shipped_at is omitted until the order ships.
    assert!(json.get("shipped_at").is_none());
}
