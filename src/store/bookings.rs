//! Bookings slice - reservations of areas for time slots.
//!
//! Times are kept as the ISO-8601 strings the host supplies; overlapping
//! bookings are not checked.

use crate::constants::{AVAILABLE_COLOR, RESERVED_COLOR};
use crate::types::AreaId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub area_id: AreaId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub user: String,
    pub start_time: String,
    pub end_time: String,
}

impl Booking {
    pub fn new(
        area_id: AreaId,
        title: impl Into<String>,
        user: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: format!("booking-{}", uuid::Uuid::new_v4()),
            area_id,
            title: title.into(),
            description: String::new(),
            user: user.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingsState {
    pub bookings: Vec<Booking>,
    pub selected_booking_id: Option<String>,
}

impl BookingsState {
    pub fn add(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }

    /// Replace the booking with the same id. No-op if not found.
    pub fn replace(&mut self, booking: Booking) -> bool {
        match self.bookings.iter_mut().find(|b| b.id == booking.id) {
            Some(existing) => {
                *existing = booking;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.bookings.len();
        self.bookings.retain(|b| b.id != id);
        if self.selected_booking_id.as_deref() == Some(id) {
            self.selected_booking_id = None;
        }
        self.bookings.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// Select a booking by id, or clear with `None`. Unknown ids are ignored.
    pub fn set_selected(&mut self, id: Option<String>) -> bool {
        if id.as_deref().is_some_and(|id| self.get(id).is_none()) {
            return false;
        }
        if self.selected_booking_id == id {
            return false;
        }
        self.selected_booking_id = id;
        true
    }

    pub fn for_area<'a>(&'a self, area_id: &'a AreaId) -> impl Iterator<Item = &'a Booking> + 'a {
        self.bookings.iter().filter(move |b| &b.area_id == area_id)
    }

    /// An area is reserved when it has at least one booking
    pub fn is_area_reserved(&self, area_id: &AreaId) -> bool {
        self.bookings.iter().any(|b| &b.area_id == area_id)
    }

    /// Fill the viewer uses for an area
    pub fn viewer_color(&self, area_id: &AreaId) -> &'static str {
        if self.is_area_reserved(area_id) {
            RESERVED_COLOR
        } else {
            AVAILABLE_COLOR
        }
    }
}
