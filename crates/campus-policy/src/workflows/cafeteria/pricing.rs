use super::domain::CustomerType;
use crate::policy::{Fixed, Money, Strategy, StrategyTable};

const DEFAULT_TAX_PCT: f64 = 8.0;

/// Order facts a discount strategy may look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountContext {
    pub customer: CustomerType,
    pub subtotal: Money,
    pub line_count: usize,
}

/// Flat discount for students whose subtotal reaches a threshold.
pub struct StudentSpendDiscount {
    pub min_subtotal: Money,
    pub amount: Money,
}

impl Strategy<DiscountContext, Money> for StudentSpendDiscount {
    fn name(&self) -> &str {
        "student-spend"
    }

    fn supports(&self, context: &DiscountContext) -> bool {
        context.customer == CustomerType::Student && context.subtotal >= self.min_subtotal
    }

    fn value(&self) -> Money {
        self.amount
    }
}

/// Flat discount for staff orders with several distinct lines.
pub struct StaffMultiLineDiscount {
    pub min_lines: usize,
    pub amount: Money,
}

impl Strategy<DiscountContext, Money> for StaffMultiLineDiscount {
    fn name(&self) -> &str {
        "staff-multi-line"
    }

    fn supports(&self, context: &DiscountContext) -> bool {
        context.customer == CustomerType::Staff && context.line_count >= self.min_lines
    }

    fn value(&self) -> Money {
        self.amount
    }
}

/// Tax percentage and discount tables for checkout.
#[derive(Debug)]
pub struct CafeteriaPricing {
    pub tax: StrategyTable<CustomerType, f64>,
    pub discounts: StrategyTable<DiscountContext, Money>,
}

impl CafeteriaPricing {
    pub fn standard() -> Self {
        let tax = StrategyTable::builder(DEFAULT_TAX_PCT)
            .strategy(Fixed::new("student", CustomerType::Student, 5.0))
            .strategy(Fixed::new("staff", CustomerType::Staff, 2.0))
            .build();

        let discounts = StrategyTable::builder(Money::ZERO)
            .strategy(StudentSpendDiscount {
                min_subtotal: Money::rupees(180),
                amount: Money::rupees(10),
            })
            .strategy(StaffMultiLineDiscount {
                min_lines: 3,
                amount: Money::rupees(15),
            })
            .build();

        Self { tax, discounts }
    }
}

impl Default for CafeteriaPricing {
    fn default() -> Self {
        Self::standard()
    }
}
