// Offer Shortlist - Core Library
// Exposes all modules for use in the CLI and tests

pub mod entities;
pub mod loader;
pub mod selection;
pub mod serializer;

// Re-export commonly used types
pub use entities::{
    Category, CategoryCatalog, Merchant, Offer, OfferDocument, OfferRecord, DATE_FORMAT,
    MIN_ADVANCE_DAYS,
};
pub use loader::load_offers;
pub use selection::{
    SelectionEngine, ELIGIBLE_CATEGORY_IDS, MAX_OFFERS, MAX_OFFERS_PER_CATEGORY,
};
pub use serializer::save_shortlist;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
