// 📂 Catalog Loader - input document → typed offers
//
// Reads the JSON offer document and resolves each record against the static
// category catalog. A missing or unparseable source is a recoverable error:
// the caller reports it and proceeds with an empty offer list.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::entities::{CategoryCatalog, Offer, OfferDocument};

/// Load all offers from a JSON source file.
pub fn load_offers<P: AsRef<Path>>(path: P, catalog: &CategoryCatalog) -> Result<Vec<Offer>> {
    let content = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read offers file: {:?}", path.as_ref()))?;

    let document: OfferDocument =
        serde_json::from_str(&content).context("Failed to parse offers JSON")?;

    Ok(document
        .offers
        .into_iter()
        .map(|record| Offer::from_record(record, catalog))
        .collect())
}
