//! Built-in sample catalog.
//!
//! Three products the shop actually carries, used by the CLI when no seed
//! file is given and by demos/tests that want a realistic catalog.

use lychee_market_core::{Product, ProductId};
use rust_decimal::Decimal;

use crate::catalog::CatalogStore;

/// The built-in three-product sample catalog.
///
/// # Panics
///
/// Panics if the hardcoded sample product ids are not distinct.
#[must_use]
pub fn sample_catalog() -> CatalogStore {
    CatalogStore::with_products(sample_products()).expect("sample product ids are distinct")
}

/// The products behind [`sample_catalog`].
#[must_use]
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "韓國KF94立體口罩".to_owned(),
            image: "https://picsum.photos/400/400?random=1".to_owned(),
            options: vec!["白色".to_owned(), "黑色".to_owned(), "粉色".to_owned()],
            country: "韓國".to_owned(),
            purchase_url: "https://example.com/kr/mask".to_owned(),
            local_price: Decimal::from(500),
            exchange_rate: Decimal::new(24, 3), // 0.024
            cost: Decimal::from(17),            // converted 12 + materials 5
            price: Decimal::from(25),
            stock: 100,
            sold: 250,
            notes: "熱銷商品，需常補貨".to_owned(),
        },
        Product {
            id: ProductId::new("2"),
            name: "日本蒸汽眼罩 (12入)".to_owned(),
            image: "https://picsum.photos/400/400?random=2".to_owned(),
            options: vec!["薰衣草".to_owned(), "無香".to_owned(), "玫瑰".to_owned()],
            country: "日本".to_owned(),
            purchase_url: "https://example.com/jp/eye".to_owned(),
            local_price: Decimal::from(980),
            exchange_rate: Decimal::new(22, 2), // 0.22
            cost: Decimal::from(230),
            price: Decimal::from(350),
            stock: 45,
            sold: 80,
            notes: "體積大，運費較高".to_owned(),
        },
        Product {
            id: ProductId::new("3"),
            name: "泰國手標泰式茶".to_owned(),
            image: "https://picsum.photos/400/400?random=3".to_owned(),
            options: vec![
                "紅色(紅茶)".to_owned(),
                "金色(特級)".to_owned(),
                "綠色(奶綠)".to_owned(),
            ],
            country: "泰國".to_owned(),
            purchase_url: "https://example.com/th/tea".to_owned(),
            local_price: Decimal::from(140),
            exchange_rate: Decimal::new(9, 1), // 0.9
            cost: Decimal::from(136),
            price: Decimal::from(220),
            stock: 200,
            sold: 500,
            notes: String::new(),
        },
    ]
}
