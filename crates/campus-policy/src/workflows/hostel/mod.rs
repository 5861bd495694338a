//! Hostel fee calculation: one room-rate resolution plus one per add-on, summed.
//!
//! Unknown room types fall back to the tariff's fallback rate; unknown add-ons
//! contribute the add-on fallback (zero by default) instead of failing the quote.

pub mod domain;
pub mod pricing;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{AddOn, BookingId, BookingRequest, RoomType};
pub use pricing::{AddOnCharge, AddOnRate, FeeQuote, HostelFeeCalculator, HostelTariff, RoomRate};
pub use repository::{BookingRecord, BookingRepository, BookingStoreError};
pub use router::hostel_router;
pub use service::{BookingReceipt, HostelBookingService};
