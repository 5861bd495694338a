use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{BookingId, BookingRequest};
use super::pricing::FeeQuote;

/// Persisted booking with the quote it was confirmed at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub booking_id: BookingId,
    pub request: BookingRequest,
    pub quote: FeeQuote,
    pub booked_at: DateTime<Utc>,
}

/// Storage abstraction for confirmed bookings.
pub trait BookingRepository: Send + Sync {
    fn save(&self, record: BookingRecord) -> Result<(), BookingStoreError>;
    fn fetch(&self, id: &BookingId) -> Result<Option<BookingRecord>, BookingStoreError>;
    fn count(&self) -> Result<usize, BookingStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BookingStoreError {
    #[error("booking not found")]
    NotFound,
    #[error("booking store unavailable: {0}")]
    Unavailable(String),
}
