// 🏪 Merchant - Location record with distance from the reference point
//
// Doubles as the wire record: id, name and distance pass through the
// pipeline verbatim (no sign or range validation on distance).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Merchant {
    pub id: u64,
    pub name: String,
    /// Distance from the implicit reference point (e.g. km). Non-negative
    /// by convention, not enforced.
    pub distance: f64,
}

impl Merchant {
    pub fn new(id: u64, name: &str, distance: f64) -> Self {
        Merchant {
            id,
            name: name.to_string(),
            distance,
        }
    }
}
