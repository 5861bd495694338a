use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::workflows::hostel::domain::{AddOn, BookingId, BookingRequest, RoomType};
use crate::workflows::hostel::pricing::{HostelFeeCalculator, HostelTariff};
use crate::workflows::hostel::repository::{BookingRecord, BookingRepository, BookingStoreError};
use crate::workflows::hostel::HostelBookingService;

pub(super) fn calculator() -> HostelFeeCalculator {
    HostelFeeCalculator::new(&HostelTariff::standard())
}

pub(super) fn double_with_laundry_and_mess() -> BookingRequest {
    BookingRequest {
        room_type: RoomType::Double,
        add_ons: vec![AddOn::Laundry, AddOn::Mess],
    }
}

pub(super) fn build_service() -> (HostelBookingService<MemoryBookings>, Arc<MemoryBookings>) {
    let repository = Arc::new(MemoryBookings::default());
    let service = HostelBookingService::new(repository.clone(), &HostelTariff::standard());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryBookings {
    records: Arc<Mutex<HashMap<BookingId, BookingRecord>>>,
}

impl BookingRepository for MemoryBookings {
    fn save(&self, record: BookingRecord) -> Result<(), BookingStoreError> {
        let mut guard = self.records.lock().expect("booking mutex poisoned");
        guard.insert(record.booking_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &BookingId) -> Result<Option<BookingRecord>, BookingStoreError> {
        let guard = self.records.lock().expect("booking mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn count(&self) -> Result<usize, BookingStoreError> {
        Ok(self.records.lock().expect("booking mutex poisoned").len())
    }
}

pub(super) struct OfflineBookings;

impl BookingRepository for OfflineBookings {
    fn save(&self, _record: BookingRecord) -> Result<(), BookingStoreError> {
        Err(BookingStoreError::Unavailable("disk full".to_string()))
    }

    fn fetch(&self, _id: &BookingId) -> Result<Option<BookingRecord>, BookingStoreError> {
        Err(BookingStoreError::Unavailable("disk full".to_string()))
    }

    fn count(&self) -> Result<usize, BookingStoreError> {
        Err(BookingStoreError::Unavailable("disk full".to_string()))
    }
}
