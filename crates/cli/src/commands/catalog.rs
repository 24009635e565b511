//! Print the product catalog.

#![allow(clippy::print_stdout)]

use lychee_market_engine::CatalogStore;

/// Print every product with its pricing, inventory and converted price.
pub fn print(catalog: &CatalogStore) {
    println!(
        "{:<6} {:<28} {:>10} {:>10} {:>8} {:>8} {:>8}",
        "ID", "NAME", "CONVERTED", "COST", "PRICE", "STOCK", "SOLD"
    );
    for product in catalog.products() {
        println!(
            "{:<6} {:<28} {:>10} {:>10} {:>8} {:>8} {:>8}",
            product.id,
            product.name,
            product.converted_price().round_dp(2),
            product.cost,
            product.price,
            product.stock,
            product.sold
        );
    }
    println!("{} products", catalog.len());
}
