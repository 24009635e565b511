//! The catalog store: the mutable set of products.

use lychee_market_core::{Product, ProductId};

use crate::error::{EngineError, Result};

/// Owns the product set in catalog (insertion) order.
///
/// Catalog order matters downstream: the accounting view emits one row per
/// product in this order.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Create an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Create a catalog pre-populated with `products`.
    ///
    /// Duplicate ids in the input are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateProduct`] on the first repeated id.
    pub fn with_products(products: Vec<Product>) -> Result<Self> {
        let mut catalog = Self::new();
        for product in products {
            catalog.add(product)?;
        }
        Ok(catalog)
    }

    /// Insert a product with a caller-supplied unique id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateProduct`] if the id is already
    /// present.
    pub fn add(&mut self, product: Product) -> Result<()> {
        if self.get(&product.id).is_some() {
            return Err(EngineError::DuplicateProduct(product.id));
        }
        self.products.push(product);
        Ok(())
    }

    /// Replace the product with the matching id in place, preserving the
    /// current `stock` and `sold` counters.
    ///
    /// This is the edit path for catalog management: the form edits prices,
    /// options and notes, while inventory counters belong to the order flow.
    /// Use [`Self::update_with_counters`] to override them explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ProductNotFound`] if the id is absent.
    pub fn update(&mut self, updated: Product) -> Result<()> {
        let existing = self
            .products
            .iter_mut()
            .find(|p| p.id == updated.id)
            .ok_or_else(|| EngineError::ProductNotFound(updated.id.clone()))?;

        let stock = existing.stock;
        let sold = existing.sold;
        *existing = updated;
        existing.stock = stock;
        existing.sold = sold;
        Ok(())
    }

    /// Replace the product with the matching id in place, including its
    /// `stock` and `sold` counters.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ProductNotFound`] if the id is absent.
    pub fn update_with_counters(&mut self, updated: Product) -> Result<()> {
        let existing = self
            .products
            .iter_mut()
            .find(|p| p.id == updated.id)
            .ok_or_else(|| EngineError::ProductNotFound(updated.id.clone()))?;
        *existing = updated;
        Ok(())
    }

    /// Remove the product with this id. Succeeds silently if absent.
    pub fn delete(&mut self, id: &ProductId) {
        self.products.retain(|p| &p.id != id);
    }

    /// Atomically apply a stock delta and a sold delta to one product.
    ///
    /// This is the primitive the order lifecycle uses: either both counters
    /// update or neither does. Returns the resulting stock level so the
    /// caller can flag oversell.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ProductNotFound`] if the id is absent; no
    /// counter is touched in that case.
    pub fn adjust_inventory(
        &mut self,
        id: &ProductId,
        delta_stock: i64,
        delta_sold: u64,
    ) -> Result<i64> {
        let product = self
            .products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| EngineError::ProductNotFound(id.clone()))?;

        product.stock += delta_stock;
        product.sold += delta_sold;
        Ok(product.stock)
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
