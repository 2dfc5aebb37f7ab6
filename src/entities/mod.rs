// Entity Models - Category, Merchant, Offer
//
// Each record is immutable once constructed: the category catalog is built
// fresh per run, offers are built once from the loaded source and never
// mutated afterwards.

pub mod category;
pub mod merchant;
pub mod offer;

pub use category::{Category, CategoryCatalog};
pub use merchant::Merchant;
pub use offer::{Offer, OfferDocument, OfferRecord, DATE_FORMAT, MIN_ADVANCE_DAYS};
