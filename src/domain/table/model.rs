//! Restaurant table domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A physical table with a seating range.
///
/// `min_capacity` keeps small parties off large tables so the best-fit
/// assignment can hold big tables back for big parties.
/// Invariant: `1 <= min_capacity <= capacity`.
#[derive(Debug, Clone)]
pub struct RestaurantTable {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    /// Human-facing label ("12", "T5", "Patio 2").
    pub table_number: String,
    /// Maximum party size.
    pub capacity: i32,
    /// Minimum party size.
    pub min_capacity: i32,
    pub is_active: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RestaurantTable {
    /// Whether a party of the given size may be seated at this table.
    pub fn fits(&self, party_size: i32) -> bool {
        self.min_capacity <= party_size && party_size <= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(min: i32, max: i32) -> RestaurantTable {
        RestaurantTable {
            id: Uuid::new_v4(),
            restaurant_id: Uuid::new_v4(),
            table_number: "T1".into(),
            capacity: max,
            min_capacity: min,
            is_active: true,
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn fits_respects_both_bounds() {
        let t = table(2, 4);
        assert!(!t.fits(1));
        assert!(t.fits(2));
        assert!(t.fits(3));
        assert!(t.fits(4));
        assert!(!t.fits(5));
    }
}
