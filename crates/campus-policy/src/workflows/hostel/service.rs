use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::domain::{BookingId, BookingRequest};
use super::pricing::{FeeQuote, HostelFeeCalculator, HostelTariff};
use super::repository::{BookingRecord, BookingRepository, BookingStoreError};

const FIRST_BOOKING_NUMBER: u64 = 7001;

/// Confirmation handed back to the resident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingReceipt {
    pub booking_id: BookingId,
    pub quote: FeeQuote,
}

/// Composes the fee calculator with booking persistence.
pub struct HostelBookingService<R> {
    calculator: Arc<HostelFeeCalculator>,
    repository: Arc<R>,
    sequence: AtomicU64,
}

impl<R> HostelBookingService<R>
where
    R: BookingRepository + 'static,
{
    pub fn new(repository: Arc<R>, tariff: &HostelTariff) -> Self {
        Self::with_calculator(HostelFeeCalculator::new(tariff), repository)
    }

    pub fn with_calculator(calculator: HostelFeeCalculator, repository: Arc<R>) -> Self {
        Self {
            calculator: Arc::new(calculator),
            repository,
            sequence: AtomicU64::new(FIRST_BOOKING_NUMBER),
        }
    }

    pub fn quote(&self, request: &BookingRequest) -> FeeQuote {
        self.calculator.quote(request)
    }

    /// Quote, assign an id, then save. A failed save is logged and the receipt still returned.
    pub fn book(&self, request: BookingRequest) -> BookingReceipt {
        let quote = self.calculator.quote(&request);
        let booking_id = self.next_booking_id();

        let record = BookingRecord {
            booking_id: booking_id.clone(),
            request,
            quote: quote.clone(),
            booked_at: Utc::now(),
        };
        if let Err(error) = self.repository.save(record) {
            tracing::warn!(
                booking_id = %booking_id.0,
                %error,
                "failed to persist hostel booking"
            );
        }

        tracing::debug!(
            booking_id = %booking_id.0,
            monthly = %quote.monthly,
            "hostel booking quoted"
        );

        BookingReceipt { booking_id, quote }
    }

    pub fn get(&self, booking_id: &BookingId) -> Result<BookingRecord, BookingStoreError> {
        self.repository
            .fetch(booking_id)?
            .ok_or(BookingStoreError::NotFound)
    }

    fn next_booking_id(&self) -> BookingId {
        let number = self.sequence.fetch_add(1, Ordering::Relaxed);
        BookingId(format!("H-{number}"))
    }
}
