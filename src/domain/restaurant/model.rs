//! Restaurant domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Restaurant record as the booking core sees it.
///
/// Ownership, approval workflow and profile editing live in the surrounding
/// application; here only the booking gates and the default service duration
/// matter.
#[derive(Debug, Clone)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// How long one seating occupies a table, in minutes. Always > 0.
    pub default_duration_minutes: i32,
    /// Set by the admin approval workflow. Unapproved restaurants
    /// never offer slots.
    pub is_approved: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Restaurant {
    /// A restaurant accepts bookings only when approved and active.
    pub fn is_bookable(&self) -> bool {
        self.is_approved && self.is_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(approved: bool, active: bool) -> Restaurant {
        Restaurant {
            id: Uuid::new_v4(),
            name: "Trattoria".into(),
            description: None,
            default_duration_minutes: 90,
            is_approved: approved,
            is_active: active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn bookable_requires_both_gates() {
        assert!(sample(true, true).is_bookable());
        assert!(!sample(false, true).is_bookable());
        assert!(!sample(true, false).is_bookable());
        assert!(!sample(false, false).is_bookable());
    }
}
