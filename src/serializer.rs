// 💾 Result Serializer - shortlist → output document
//
// Projects each selected offer down to its closest merchant and writes the
// wrapped document. The JSON is fully rendered in memory before the file is
// touched, so a serialization failure leaves no partial output; an
// unwritable destination is a recoverable error reported by the caller.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::entities::{Offer, OfferDocument};

/// Write the shortlist to a JSON file as {"offers": [...]}.
pub fn save_shortlist<P: AsRef<Path>>(path: P, offers: &[Offer]) -> Result<()> {
    let document = OfferDocument {
        offers: offers.iter().map(Offer::to_record).collect(),
    };

    let json = serde_json::to_string_pretty(&document).context("Failed to serialize shortlist")?;

    fs::write(path.as_ref(), json)
        .with_context(|| format!("Failed to write shortlist file: {:?}", path.as_ref()))?;

    Ok(())
}
