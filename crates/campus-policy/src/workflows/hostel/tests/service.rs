use super::common::*;
use crate::policy::Money;
use crate::workflows::hostel::domain::BookingId;
use crate::workflows::hostel::pricing::HostelTariff;
use crate::workflows::hostel::repository::{BookingRepository, BookingStoreError};
use crate::workflows::hostel::HostelBookingService;
use std::sync::Arc;

#[test]
fn book_assigns_sequential_ids_and_persists() {
    let (service, repository) = build_service();

    let first = service.book(double_with_laundry_and_mess());
    let second = service.book(double_with_laundry_and_mess());

    assert_eq!(first.booking_id, BookingId("H-7001".to_string()));
    assert_eq!(second.booking_id, BookingId("H-7002".to_string()));
    assert_eq!(repository.count().expect("count"), 2);

    let stored = service.get(&first.booking_id).expect("stored booking");
    assert_eq!(stored.quote.monthly, Money::rupees(16_500));
}

#[test]
fn quote_does_not_persist() {
    let (service, repository) = build_service();

    service.quote(&double_with_laundry_and_mess());

    assert_eq!(repository.count().expect("count"), 0);
}

#[test]
fn booking_survives_repository_outage() {
    let service = HostelBookingService::new(Arc::new(OfflineBookings), &HostelTariff::standard());

    let receipt = service.book(double_with_laundry_and_mess());

    assert_eq!(receipt.quote.monthly, Money::rupees(16_500));
    match service.get(&receipt.booking_id) {
        Err(BookingStoreError::Unavailable(_)) => {}
        other => panic!("expected unavailable store, got {other:?}"),
    }
}

#[test]
fn get_reports_missing_bookings() {
    let (service, _) = build_service();

    match service.get(&BookingId("H-0000".to_string())) {
        Err(BookingStoreError::NotFound) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}
