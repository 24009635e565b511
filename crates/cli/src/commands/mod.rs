//! CLI command implementations.

use std::path::PathBuf;

use lychee_market_core::Product;
use lychee_market_engine::{CatalogStore, seed};
use serde::Deserialize;
use tracing::info;

pub mod catalog;
pub mod simulate;

/// A YAML catalog seed file.
#[derive(Debug, Deserialize)]
pub struct SeedFile {
    pub products: Vec<Product>,
}

/// Load a catalog from a YAML seed file, or fall back to the built-in
/// sample catalog.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid YAML, or
/// contains duplicate product ids.
pub fn load_catalog(path: Option<PathBuf>) -> Result<CatalogStore, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        info!("no seed file configured, using built-in sample catalog");
        return Ok(seed::sample_catalog());
    };

    let content = std::fs::read_to_string(&path)?;
    let seed: SeedFile = serde_yaml::from_str(&content)?;
    info!(path = %path.display(), products = seed.products.len(), "loaded catalog seed");

    Ok(CatalogStore::with_products(seed.products)?)
}
