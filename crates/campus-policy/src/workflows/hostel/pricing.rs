use serde::{Deserialize, Serialize};

use super::domain::{AddOn, BookingRequest, RoomType};
use crate::policy::{Money, Resolution, Strategy, StrategyTable};

/// Monthly rent for one room category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRate {
    pub room_type: RoomType,
    pub monthly: Money,
}

impl Strategy<RoomType, Money> for RoomRate {
    fn name(&self) -> &str {
        self.room_type.label()
    }

    fn supports(&self, room_type: &RoomType) -> bool {
        self.room_type == *room_type
    }

    fn value(&self) -> Money {
        self.monthly
    }
}

/// Monthly charge for one add-on service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnRate {
    pub add_on: AddOn,
    pub monthly: Money,
}

impl Strategy<AddOn, Money> for AddOnRate {
    fn name(&self) -> &str {
        self.add_on.label()
    }

    fn supports(&self, add_on: &AddOn) -> bool {
        self.add_on == *add_on
    }

    fn value(&self) -> Money {
        self.monthly
    }
}

/// Rate tables in lookup order, with their fallbacks and the one-time deposit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostelTariff {
    pub rooms: Vec<RoomRate>,
    pub add_ons: Vec<AddOnRate>,
    pub fallback_room_rate: Money,
    pub add_on_fallback: Money,
    pub security_deposit: Money,
}

impl HostelTariff {
    pub fn standard() -> Self {
        Self {
            rooms: vec![
                RoomRate {
                    room_type: RoomType::Single,
                    monthly: Money::rupees(14_000),
                },
                RoomRate {
                    room_type: RoomType::Double,
                    monthly: Money::rupees(15_000),
                },
                RoomRate {
                    room_type: RoomType::Triple,
                    monthly: Money::rupees(12_000),
                },
                RoomRate {
                    room_type: RoomType::Deluxe,
                    monthly: Money::rupees(16_000),
                },
            ],
            add_ons: vec![
                AddOnRate {
                    add_on: AddOn::Mess,
                    monthly: Money::rupees(1_000),
                },
                AddOnRate {
                    add_on: AddOn::Laundry,
                    monthly: Money::rupees(500),
                },
                AddOnRate {
                    add_on: AddOn::Gym,
                    monthly: Money::rupees(300),
                },
            ],
            fallback_room_rate: Money::rupees(16_000),
            add_on_fallback: Money::ZERO,
            security_deposit: Money::rupees(5_000),
        }
    }

    fn room_table(&self) -> StrategyTable<RoomType, Money> {
        let strategies = self
            .rooms
            .iter()
            .map(|rate| Box::new(*rate) as Box<dyn Strategy<RoomType, Money>>)
            .collect();
        StrategyTable::new(strategies, self.fallback_room_rate)
    }

    fn add_on_table(&self) -> StrategyTable<AddOn, Money> {
        let strategies = self
            .add_ons
            .iter()
            .map(|rate| Box::new(*rate) as Box<dyn Strategy<AddOn, Money>>)
            .collect();
        StrategyTable::new(strategies, self.add_on_fallback)
    }
}

impl Default for HostelTariff {
    fn default() -> Self {
        Self::standard()
    }
}

/// Resolved charge for one add-on. `matched` is `None` when the fallback applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnCharge {
    pub add_on: AddOn,
    pub amount: Money,
    pub matched: Option<String>,
}

/// Monthly fee breakdown for a booking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeQuote {
    pub room_type: RoomType,
    pub room: Resolution<Money>,
    pub add_ons: Vec<AddOnCharge>,
    pub monthly: Money,
    pub deposit: Money,
}

impl FeeQuote {
    pub fn add_on_total(&self) -> Money {
        self.add_ons.iter().map(|charge| charge.amount).sum()
    }

    /// First payment: one month plus the refundable deposit.
    pub fn due_at_booking(&self) -> Money {
        self.monthly + self.deposit
    }
}

/// Resolves the room rate once and each add-on independently, then sums them.
#[derive(Debug)]
pub struct HostelFeeCalculator {
    rooms: StrategyTable<RoomType, Money>,
    add_ons: StrategyTable<AddOn, Money>,
    deposit: Money,
}

impl HostelFeeCalculator {
    pub fn new(tariff: &HostelTariff) -> Self {
        Self::with_tables(
            tariff.room_table(),
            tariff.add_on_table(),
            tariff.security_deposit,
        )
    }

    pub fn with_tables(
        rooms: StrategyTable<RoomType, Money>,
        add_ons: StrategyTable<AddOn, Money>,
        deposit: Money,
    ) -> Self {
        Self {
            rooms,
            add_ons,
            deposit,
        }
    }

    pub fn quote(&self, request: &BookingRequest) -> FeeQuote {
        let room = self.rooms.resolve(&request.room_type);

        let add_ons: Vec<AddOnCharge> = request
            .add_ons
            .iter()
            .zip(self.add_ons.resolve_each(&request.add_ons))
            .map(|(add_on, resolution)| AddOnCharge {
                add_on: *add_on,
                amount: resolution.value,
                matched: resolution.matched,
            })
            .collect();

        let monthly = room.value + add_ons.iter().map(|charge| charge.amount).sum::<Money>();

        if room.is_fallback() {
            tracing::debug!(
                room_type = %request.room_type,
                fallback = %self.rooms.fallback(),
                "room type unmatched; using fallback rate"
            );
        }

        FeeQuote {
            room_type: request.room_type,
            room,
            add_ons,
            monthly,
            deposit: self.deposit,
        }
    }
}
