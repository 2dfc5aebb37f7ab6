// 🎯 Selection Engine - validity filter, per-category grouping, distance
// ranking, quota cap
//
// Surfaces the geographically closest, still-valid offer per eligible
// category, capped at a small total count, favoring categories whose best
// offer is nearest.

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::entities::Offer;

/// Overall maximum number of offers in the final shortlist.
pub const MAX_OFFERS: usize = 2;

/// Maximum offers retained per category.
pub const MAX_OFFERS_PER_CATEGORY: usize = 1;

/// The only category ids eligible for selection. Hotel (3) is excluded by
/// policy.
pub const ELIGIBLE_CATEGORY_IDS: [u32; 3] = [1, 2, 4];

pub struct SelectionEngine {
    check_in_date: NaiveDate,
}

impl SelectionEngine {
    pub fn new(check_in_date: NaiveDate) -> Self {
        SelectionEngine { check_in_date }
    }

    /// Select the shortlist from the full offer pool.
    ///
    /// 1. Keep offers that are valid for the check-in date, belong to an
    ///    eligible category and have at least one merchant.
    /// 2. Group by category id, insertion order preserved.
    /// 3. Rank groups ascending by the closest-merchant distance of each
    ///    group's FIRST-listed offer. NOTE: this first-element heuristic is
    ///    kept as-is even where it diverges from the group's true minimum
    ///    (see DESIGN.md); step 4 then picks the true minimum within the
    ///    group.
    /// 4. Per ranked group, take the offer with the smallest closest-merchant
    ///    distance (first occurrence wins ties), one per category.
    /// 5. Stop at min(MAX_OFFERS, MAX_OFFERS_PER_CATEGORY × eligible count).
    pub fn shortlist(&self, offers: &[Offer]) -> Vec<Offer> {
        let cap = MAX_OFFERS.min(MAX_OFFERS_PER_CATEGORY * ELIGIBLE_CATEGORY_IDS.len());

        let mut groups: Vec<(u32, Vec<&Offer>)> = Vec::new();
        for offer in offers {
            let Some(category) = &offer.category else {
                continue;
            };
            if !ELIGIBLE_CATEGORY_IDS.contains(&category.id) {
                continue;
            }
            if !offer.is_valid(self.check_in_date) {
                continue;
            }
            // Offers without merchants cannot be ranked; ineligible upstream
            if offer.closest_merchant().is_none() {
                continue;
            }

            match groups.iter_mut().find(|(id, _)| *id == category.id) {
                Some((_, group)) => group.push(offer),
                None => groups.push((category.id, vec![offer])),
            }
        }

        // Stable sort keeps insertion order for equal distances
        groups.sort_by(|(_, a), (_, b)| {
            first_listed_distance(a).total_cmp(&first_listed_distance(b))
        });

        let mut selected = Vec::new();
        let mut selected_categories = HashSet::new();
        for (category_id, group) in groups {
            if selected.len() >= cap {
                break;
            }

            let best = group
                .into_iter()
                .reduce(|best, o| if closest_distance(o) < closest_distance(best) { o } else { best });

            if let Some(best) = best {
                if selected_categories.insert(category_id) {
                    selected.push(best.clone());
                }
            }
        }

        selected
    }
}

fn closest_distance(offer: &Offer) -> f64 {
    offer
        .closest_merchant()
        .map_or(f64::INFINITY, |m| m.distance)
}

fn first_listed_distance(group: &[&Offer]) -> f64 {
    group.first().map_or(f64::INFINITY, |o| closest_distance(o))
}
