//! Reservation domain entity and status state machine

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult};

/// Characters used in confirmation codes. Visually confusable
/// characters (0/O, 1/I) are excluded; 32 entries keep the
/// modulo mapping from random bytes unbiased.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Confirmation code length in characters.
const CODE_LENGTH: usize = 8;

/// Generate a human-shareable confirmation code from a
/// cryptographically strong random source.
///
/// Uniqueness is enforced by the store; callers must be prepared to
/// regenerate on a collision.
pub fn generate_confirmation_code() -> String {
    let mut bytes = [0u8; CODE_LENGTH];
    OsRng.fill_bytes(&mut bytes);
    bytes
        .iter()
        .map(|b| CODE_ALPHABET[(*b as usize) % CODE_ALPHABET.len()] as char)
        .collect()
}

/// Reservation status
///
/// `Pending` is reserved for a future hold-then-confirm flow; the booking
/// path creates reservations directly as `Confirmed` and never produces
/// `Pending` rows. It still counts as occupying for conflict checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Completed,
    CancelledByCustomer,
    CancelledByRestaurant,
    NoShow,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Completed => "Completed",
            Self::CancelledByCustomer => "CancelledByCustomer",
            Self::CancelledByRestaurant => "CancelledByRestaurant",
            Self::NoShow => "NoShow",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(Self::Pending),
            "Confirmed" => Some(Self::Confirmed),
            "Completed" => Some(Self::Completed),
            "CancelledByCustomer" => Some(Self::CancelledByCustomer),
            "CancelledByRestaurant" => Some(Self::CancelledByRestaurant),
            "NoShow" => Some(Self::NoShow),
            _ => None,
        }
    }

    /// Whether a reservation in this status blocks its table-time interval.
    pub fn is_occupying(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A table booking for a party at a specific date and time.
///
/// Created only through the booking commit protocol; mutated only through
/// the lifecycle methods below; never physically deleted (cancellation is a
/// status change kept for audit).
#[derive(Debug, Clone)]
pub struct Reservation {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub table_id: Uuid,
    /// Opaque reference into the identity collaborator.
    pub customer_id: Uuid,
    pub reservation_date: NaiveDate,
    pub start_time: NaiveTime,
    /// Derived: `start_time + duration_minutes`.
    pub end_time: NaiveTime,
    pub duration_minutes: i32,
    pub party_size: i32,
    pub status: ReservationStatus,
    pub special_requests: Option<String>,
    pub confirmation_code: String,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub cancellation_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Construct a new reservation in `Confirmed` status.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        restaurant_id: Uuid,
        table_id: Uuid,
        customer_id: Uuid,
        reservation_date: NaiveDate,
        start_time: NaiveTime,
        duration_minutes: i32,
        party_size: i32,
        special_requests: Option<String>,
    ) -> DomainResult<Self> {
        if party_size <= 0 {
            return Err(DomainError::Validation(
                "Party size must be positive".into(),
            ));
        }
        if duration_minutes <= 0 {
            return Err(DomainError::Validation("Duration must be positive".into()));
        }

        let end_time = start_time
            .overflowing_add_signed(Duration::minutes(duration_minutes as i64))
            .0;

        Ok(Self {
            id: Uuid::new_v4(),
            restaurant_id,
            table_id,
            customer_id,
            reservation_date,
            start_time,
            end_time,
            duration_minutes,
            party_size,
            status: ReservationStatus::Confirmed,
            special_requests: special_requests.map(|s| s.trim().to_string()),
            confirmation_code: generate_confirmation_code(),
            cancelled_at: None,
            cancellation_reason: None,
            created_at: Utc::now(),
        })
    }

    /// Cancel this reservation, recording who triggered it and why.
    ///
    /// Allowed while the reservation still occupies its slot (Confirmed, or
    /// Pending once a hold flow exists). Terminal states reject the
    /// transition; nothing ever returns to Confirmed.
    pub fn cancel(&mut self, by_restaurant: bool, reason: Option<String>) -> DomainResult<()> {
        if !self.status.is_occupying() {
            return Err(DomainError::Conflict(format!(
                "Cannot cancel a reservation with status '{}'",
                self.status
            )));
        }

        self.status = if by_restaurant {
            ReservationStatus::CancelledByRestaurant
        } else {
            ReservationStatus::CancelledByCustomer
        };
        self.cancelled_at = Some(Utc::now());
        self.cancellation_reason = reason.map(|r| r.trim().to_string());
        Ok(())
    }

    /// Mark the visit as completed. Only valid from Confirmed.
    pub fn complete(&mut self) -> DomainResult<()> {
        if self.status != ReservationStatus::Confirmed {
            return Err(DomainError::Conflict(format!(
                "Only confirmed reservations can be completed, not '{}'",
                self.status
            )));
        }
        self.status = ReservationStatus::Completed;
        Ok(())
    }

    /// Mark the party as a no-show. Only valid from Confirmed.
    pub fn mark_no_show(&mut self) -> DomainResult<()> {
        if self.status != ReservationStatus::Confirmed {
            return Err(DomainError::Conflict(format!(
                "Only confirmed reservations can be marked as no-show, not '{}'",
                self.status
            )));
        }
        self.status = ReservationStatus::NoShow;
        Ok(())
    }

    /// Customer-initiated cancellation requires a minimum lead time before
    /// the seating starts; restaurant- and admin-initiated cancellation
    /// does not go through this check.
    pub fn can_be_cancelled_by_customer(&self, window_hours: i64, now: DateTime<Utc>) -> bool {
        let starts_at = self.reservation_date.and_time(self.start_time).and_utc();
        now + Duration::hours(window_hours) < starts_at
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reservation() -> Reservation {
        let date = Utc::now().date_naive() + Duration::days(7);
        Reservation::create(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            date,
            NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            90,
            4,
            Some("  window seat ".into()),
        )
        .unwrap()
    }

    #[test]
    fn new_reservation_is_confirmed() {
        let r = sample_reservation();
        assert_eq!(r.status, ReservationStatus::Confirmed);
        assert_eq!(r.end_time, NaiveTime::from_hms_opt(20, 30, 0).unwrap());
        assert_eq!(r.special_requests.as_deref(), Some("window seat"));
        assert!(r.cancelled_at.is_none());
    }

    #[test]
    fn create_rejects_nonpositive_party_size() {
        let err = Reservation::create(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            90,
            0,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn cancel_by_customer_records_reason_and_timestamp() {
        let mut r = sample_reservation();
        r.cancel(false, Some("change of plans".into())).unwrap();
        assert_eq!(r.status, ReservationStatus::CancelledByCustomer);
        assert!(r.cancelled_at.is_some());
        assert_eq!(r.cancellation_reason.as_deref(), Some("change of plans"));
    }

    #[test]
    fn cancel_by_restaurant_sets_restaurant_status() {
        let mut r = sample_reservation();
        r.cancel(true, None).unwrap();
        assert_eq!(r.status, ReservationStatus::CancelledByRestaurant);
    }

    #[test]
    fn terminal_states_reject_cancel() {
        let mut r = sample_reservation();
        r.complete().unwrap();
        let err = r.cancel(false, None).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(r.status, ReservationStatus::Completed);
    }

    #[test]
    fn complete_only_from_confirmed() {
        let mut r = sample_reservation();
        r.cancel(false, None).unwrap();
        assert!(r.complete().is_err());
    }

    #[test]
    fn no_show_only_from_confirmed() {
        let mut r = sample_reservation();
        r.mark_no_show().unwrap();
        assert_eq!(r.status, ReservationStatus::NoShow);
        assert!(r.mark_no_show().is_err());
    }

    #[test]
    fn cancellation_window_enforced() {
        let mut r = sample_reservation();
        r.reservation_date = Utc::now().date_naive();
        let now = Utc::now();
        // Starts in one hour: inside the 2h window
        r.start_time = (now + Duration::hours(1)).time();
        assert!(!r.can_be_cancelled_by_customer(2, now));
        // Starts in three hours: outside the window
        r.reservation_date = (now + Duration::hours(3)).date_naive();
        r.start_time = (now + Duration::hours(3)).time();
        assert!(r.can_be_cancelled_by_customer(2, now));
    }

    #[test]
    fn status_string_roundtrip() {
        for status in &[
            ReservationStatus::Pending,
            ReservationStatus::Confirmed,
            ReservationStatus::Completed,
            ReservationStatus::CancelledByCustomer,
            ReservationStatus::CancelledByRestaurant,
            ReservationStatus::NoShow,
        ] {
            assert_eq!(ReservationStatus::parse(status.as_str()), Some(*status));
        }
        assert_eq!(ReservationStatus::parse("Unknown"), None);
    }

    #[test]
    fn occupying_statuses() {
        assert!(ReservationStatus::Pending.is_occupying());
        assert!(ReservationStatus::Confirmed.is_occupying());
        assert!(!ReservationStatus::Completed.is_occupying());
        assert!(!ReservationStatus::CancelledByCustomer.is_occupying());
        assert!(!ReservationStatus::CancelledByRestaurant.is_occupying());
        assert!(!ReservationStatus::NoShow.is_occupying());
    }

    #[test]
    fn confirmation_code_shape() {
        let code = generate_confirmation_code();
        assert_eq!(code.len(), 8);
        for c in code.chars() {
            assert!(CODE_ALPHABET.contains(&(c as u8)), "unexpected char {c}");
        }
        // No confusable characters in the alphabet at all
        for banned in ['0', 'O', '1', 'I'] {
            assert!(!code.contains(banned));
        }
    }
}
