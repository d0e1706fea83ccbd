//! Booking notification request DTO.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::mailer::BookingDetail;

#[derive(Deserialize, ToSchema, Debug, Clone)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub meeting_date: Option<String>,
    pub message: Option<String>,
    /// Present when an admin is announcing a booking status change.
    pub status: Option<String>,
}

impl BookingRequest {
    pub fn into_detail(self) -> BookingDetail {
        BookingDetail {
            name: self.name,
            email: self.email,
            phone: self.phone,
            meeting_date: self.meeting_date,
            message: self.message,
            status: self.status,
        }
    }
}
