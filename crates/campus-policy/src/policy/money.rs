use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Rupee amount stored as integer paise so sums stay exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn rupees(amount: i64) -> Self {
        Self(amount * 100)
    }

    /// `None` when the amount does not fit in paise.
    pub const fn try_rupees(amount: i64) -> Option<Self> {
        match amount.checked_mul(100) {
            Some(paise) => Some(Self(paise)),
            None => None,
        }
    }

    pub const fn from_paise(paise: i64) -> Self {
        Self(paise)
    }

    pub const fn paise(self) -> i64 {
        self.0
    }

    pub fn as_rupees(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Rounds half away from zero to the nearest paisa.
    pub fn from_rupees_f64(amount: f64) -> Self {
        Self((amount * 100.0).round() as i64)
    }

    pub fn percent(self, pct: f64) -> Self {
        Self((self.0 as f64 * pct / 100.0).round() as i64)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, rhs: u32) -> Money {
        Money(self.0 * i64::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}₹{}.{:02}", abs / 100, abs % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_rupees())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() {
            return Err(serde::de::Error::custom("amount must be a finite number"));
        }
        Ok(Money::from_rupees_f64(amount))
    }
}
