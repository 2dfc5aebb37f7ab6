// 🎁 Offer - Promotional offer with validity window and merchant list
//
// Constructed once from the loaded source and never mutated. A valid_to
// string that fails the YYYY-MM-DD parse leaves the offer permanently
// invalid; an unknown category id leaves it without a category, which the
// selection filter excludes.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryCatalog};
use super::merchant::Merchant;

/// Minimum number of days the expiry must lie past check-in. Fixed policy
/// parameter, not user-configurable.
pub const MIN_ADVANCE_DAYS: i64 = 5;

/// Calendar-date format for valid_to and the check-in argument.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire envelope for both the input and output documents.
#[derive(Debug, Serialize, Deserialize)]
pub struct OfferDocument {
    pub offers: Vec<OfferRecord>,
}

/// Wire record for a single offer.
///
/// On input, `category` carries the raw id and `valid_to` the raw (possibly
/// malformed) date string. On output, `category` is null when unresolved and
/// `merchants` holds exactly the closest merchant.
#[derive(Debug, Serialize, Deserialize)]
pub struct OfferRecord {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: Option<u32>,
    pub merchants: Vec<Merchant>,
    pub valid_to: Option<String>,
}

/// In-memory offer.
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub merchants: Vec<Merchant>,
    pub valid_to: Option<NaiveDate>,
}

impl Offer {
    /// Parse a valid_to string. Strict YYYY-MM-DD, real calendar dates only;
    /// anything else yields None and the offer stays permanently invalid.
    pub fn parse_valid_to(s: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
    }

    /// Build an offer from a wire record, resolving the category id against
    /// the static catalog.
    pub fn from_record(record: OfferRecord, catalog: &CategoryCatalog) -> Self {
        Offer {
            id: record.id,
            title: record.title,
            description: record.description,
            category: record
                .category
                .and_then(|id| catalog.find_by_id(id))
                .cloned(),
            merchants: record.merchants,
            valid_to: record.valid_to.as_deref().and_then(Self::parse_valid_to),
        }
    }

    /// An offer is usable only if its expiry is at least MIN_ADVANCE_DAYS
    /// past the check-in date.
    pub fn is_valid(&self, check_in_date: NaiveDate) -> bool {
        match self.valid_to {
            Some(valid_to) => check_in_date + Duration::days(MIN_ADVANCE_DAYS) <= valid_to,
            None => false,
        }
    }

    /// Merchant with the minimum distance. Ties keep the first occurrence in
    /// the original list; an empty merchant list yields None.
    pub fn closest_merchant(&self) -> Option<&Merchant> {
        self.merchants
            .iter()
            .reduce(|best, m| if m.distance < best.distance { m } else { best })
    }

    /// Lossy output projection: only the closest merchant is retained,
    /// regardless of how many merchants the offer originally had.
    pub fn to_record(&self) -> OfferRecord {
        OfferRecord {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.as_ref().map(|c| c.id),
            merchants: self.closest_merchant().cloned().into_iter().collect(),
            valid_to: self.valid_to.map(|d| d.format(DATE_FORMAT).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    fn offer_with(valid_to: Option<NaiveDate>, merchants: Vec<Merchant>) -> Offer {
        Offer {
            id: 1,
            title: "Two-for-one tapas".to_string(),
            description: "Weekday evenings".to_string(),
            category: Some(Category::new(1, "Restaurant")),
            merchants,
            valid_to,
        }
    }

    #[test]
    fn test_parse_valid_to() {
        assert_eq!(Offer::parse_valid_to("2024-01-10"), Some(date("2024-01-10")));
        assert_eq!(Offer::parse_valid_to("not-a-date"), None);
        assert_eq!(Offer::parse_valid_to("2024/01/10"), None);
        // Must denote a real calendar date
        assert_eq!(Offer::parse_valid_to("2024-02-30"), None);
    }

    #[test]
    fn test_is_valid_window_boundary() {
        let offer = offer_with(Some(date("2024-01-06")), vec![]);

        // Expiry exactly 5 days past check-in is still valid
        assert!(offer.is_valid(date("2024-01-01")));
        // One day later the window is too short
        assert!(!offer.is_valid(date("2024-01-02")));
    }

    #[test]
    fn test_is_valid_without_expiry() {
        let offer = offer_with(None, vec![]);
        assert!(!offer.is_valid(date("2024-01-01")));
    }

    #[test]
    fn test_closest_merchant_stable_minimum() {
        let offer = offer_with(
            Some(date("2024-01-10")),
            vec![
                Merchant::new(1, "Far", 4.0),
                Merchant::new(2, "Near A", 1.5),
                Merchant::new(3, "Near B", 1.5),
            ],
        );

        // Tie at 1.5 keeps the first occurrence
        assert_eq!(offer.closest_merchant().map(|m| m.id), Some(2));
    }

    #[test]
    fn test_closest_merchant_empty_list() {
        let offer = offer_with(Some(date("2024-01-10")), vec![]);
        assert!(offer.closest_merchant().is_none());
    }

    #[test]
    fn test_from_record_resolves_category_and_date() {
        let catalog = CategoryCatalog::with_defaults();
        let record = OfferRecord {
            id: 9,
            title: "Hotel weekend".to_string(),
            description: "City centre".to_string(),
            category: Some(3),
            merchants: vec![Merchant::new(1, "Grand Hotel", 0.4)],
            valid_to: Some("2024-03-01".to_string()),
        };

        let offer = Offer::from_record(record, &catalog);

        assert_eq!(offer.category.as_ref().map(|c| c.name.as_str()), Some("Hotel"));
        assert_eq!(offer.valid_to, Some(date("2024-03-01")));
    }

    #[test]
    fn test_from_record_unknown_category_and_bad_date() {
        let catalog = CategoryCatalog::with_defaults();
        let record = OfferRecord {
            id: 9,
            title: "Mystery deal".to_string(),
            description: "".to_string(),
            category: Some(42),
            merchants: vec![],
            valid_to: Some("soon".to_string()),
        };

        let offer = Offer::from_record(record, &catalog);

        assert!(offer.category.is_none());
        assert!(offer.valid_to.is_none());
    }

    #[test]
    fn test_to_record_keeps_only_closest_merchant() {
        let offer = offer_with(
            Some(date("2024-01-10")),
            vec![
                Merchant::new(1, "Far", 4.0),
                Merchant::new(2, "Near", 1.5),
            ],
        );

        let record = offer.to_record();

        assert_eq!(record.category, Some(1));
        assert_eq!(record.valid_to.as_deref(), Some("2024-01-10"));
        assert_eq!(record.merchants.len(), 1);
        assert_eq!(record.merchants[0].id, 2);
    }

    #[test]
    fn test_to_record_null_fields() {
        let mut offer = offer_with(None, vec![]);
        offer.category = None;

        let record = offer.to_record();

        assert_eq!(record.category, None);
        assert_eq!(record.valid_to, None);
        assert!(record.merchants.is_empty());
    }
}
