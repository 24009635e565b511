//! Drive a scripted store session and print the accounting report.
//!
//! The script walks the whole lifecycle: a member registers, fills a cart,
//! checks out, the operator reconciles the remittance and ships the order,
//! and a second order is left pending. The resulting per-product P/L report
//! is printed with grand totals.

#![allow(clippy::print_stdout)]

use lychee_market_core::{CustomerInfo, Phone, ShippingInfo};
use lychee_market_engine::{Cart, CatalogStore, StoreEngine};
use rust_decimal::Decimal;
use tracing::info;

/// Run the scripted session against the given catalog.
///
/// # Errors
///
/// Returns an error if the catalog is empty or an order cannot be created.
pub fn run(catalog: CatalogStore, discount: Decimal) -> Result<(), Box<dyn std::error::Error>> {
    let engine = StoreEngine::with_catalog(catalog);
    let products = engine.products();
    let first = products.first().ok_or("catalog has no products")?;

    // A customer registers, then orders three units of the first product.
    let phone = Phone::parse("0912345678")?;
    engine.register_member("Amy", phone.clone(), None);

    let mut cart = Cart::new();
    cart.add_line(first, first.options.first().map_or("", String::as_str), 3)?;

    let order = engine.create_order(
        &mut cart,
        discount,
        CustomerInfo {
            name: "Amy".to_owned(),
            payment_time: "10:00".to_owned(),
            payment_last5: "12345".to_owned(),
        },
        ShippingInfo {
            recipient: "Amy".to_owned(),
            phone: phone.clone(),
            pickup_store: "Downtown".to_owned(),
        },
    )?;
    info!(order_id = %order.id, final_amount = %order.final_amount, "first order placed");

    // The operator reconciles the remittance and ships.
    engine.verify_payment(&order.id);
    engine.mark_shipped(&order.id);

    // A second order stays pending reconciliation.
    if let Some(second) = products.get(1) {
        let mut cart = Cart::new();
        cart.add_line(second, second.options.first().map_or("", String::as_str), 1)?;
        let pending = engine.create_order(
            &mut cart,
            discount,
            CustomerInfo {
                name: "Ben".to_owned(),
                payment_time: "11:30".to_owned(),
                payment_last5: "67890".to_owned(),
            },
            ShippingInfo {
                recipient: "Ben".to_owned(),
                phone: Phone::parse("0987654321")?,
                pickup_store: "Uptown".to_owned(),
            },
        )?;
        info!(order_id = %pending.id, "second order left pending");
    }

    print_orders(&engine, &phone);
    print_report(&engine);
    Ok(())
}

fn print_orders(engine: &StoreEngine, phone: &Phone) {
    println!("\nOrder history for {phone}:");
    for order in engine.orders_for(phone) {
        println!(
            "  {} [{}] {} items, total {}",
            order.id,
            order.status,
            order.items.len(),
            order.final_amount
        );
    }
}

fn print_report(engine: &StoreEngine) {
    let report = engine.accounting_report();

    println!(
        "\n{:<6} {:<28} {:>6} {:>10} {:>10} {:>10}",
        "ID", "NAME", "SOLD", "REVENUE", "COST", "PROFIT"
    );
    for row in &report.rows {
        println!(
            "{:<6} {:<28} {:>6} {:>10} {:>10} {:>10}",
            row.product_id,
            row.product_name,
            row.total_sold,
            row.total_revenue,
            row.total_cost,
            row.profit
        );
    }
    println!(
        "\nGrand totals: revenue {} / profit {}",
        report.totals.revenue, report.totals.profit
    );
}
