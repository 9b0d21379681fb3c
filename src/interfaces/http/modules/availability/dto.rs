//! Availability DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::application::AvailableSlot;
use crate::interfaces::http::common::format_time;

/// Query parameters for the availability endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct AvailabilityQuery {
    /// Target date, `yyyy-MM-dd`
    pub date: String,
    /// Number of guests
    pub party_size: i32,
}

/// One offerable slot with its best-fit table.
#[derive(Debug, Serialize, ToSchema)]
pub struct AvailableSlotDto {
    /// Slot start, `HH:mm`
    pub slot_time: String,
    pub table_id: Uuid,
    pub table_number: String,
    pub table_capacity: i32,
}

impl From<AvailableSlot> for AvailableSlotDto {
    fn from(slot: AvailableSlot) -> Self {
        Self {
            slot_time: format_time(slot.slot_time),
            table_id: slot.table_id,
            table_number: slot.table_number,
            table_capacity: slot.table_capacity,
        }
    }
}
