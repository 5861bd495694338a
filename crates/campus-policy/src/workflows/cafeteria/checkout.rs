use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::domain::{CustomerType, Menu, OrderLine};
use super::pricing::{CafeteriaPricing, DiscountContext};
use crate::policy::Money;

const FIRST_INVOICE_NUMBER: u64 = 1001;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvoiceId(pub String);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub item_id: String,
    pub name: String,
    pub qty: u32,
    pub unit_price: Money,
    pub line_total: Money,
}

/// Priced order. `total = subtotal + tax - discount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_id: InvoiceId,
    pub customer: CustomerType,
    pub lines: Vec<InvoiceLine>,
    pub subtotal: Money,
    pub tax_pct: f64,
    pub tax: Money,
    pub discount: Money,
    pub total: Money,
}

pub trait InvoiceStore: Send + Sync {
    fn save(&self, invoice: &Invoice) -> Result<(), InvoiceStoreError>;
    fn count(&self) -> Result<usize, InvoiceStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum InvoiceStoreError {
    #[error("invoice store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("menu has no item '{0}'")]
    UnknownItem(String),
}

/// Prices orders against the menu and hands invoices to the store.
pub struct CafeteriaCheckout<S> {
    menu: Menu,
    pricing: CafeteriaPricing,
    store: Arc<S>,
    sequence: AtomicU64,
}

impl<S> CafeteriaCheckout<S>
where
    S: InvoiceStore + 'static,
{
    pub fn new(menu: Menu, pricing: CafeteriaPricing, store: Arc<S>) -> Self {
        Self {
            menu,
            pricing,
            store,
            sequence: AtomicU64::new(FIRST_INVOICE_NUMBER),
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn checkout(
        &self,
        customer: CustomerType,
        order: &[OrderLine],
    ) -> Result<Invoice, CheckoutError> {
        let lines = order
            .iter()
            .map(|line| -> Result<InvoiceLine, CheckoutError> {
                let item = self
                    .menu
                    .get(&line.item_id)
                    .ok_or_else(|| CheckoutError::UnknownItem(line.item_id.clone()))?;
                Ok(InvoiceLine {
                    item_id: item.id.clone(),
                    name: item.name.clone(),
                    qty: line.qty,
                    unit_price: item.price,
                    line_total: item.price * line.qty,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let subtotal: Money = lines.iter().map(|line| line.line_total).sum();
        let tax_pct = self.pricing.tax.resolve(&customer).value;
        let tax = subtotal.percent(tax_pct);
        let discount = self
            .pricing
            .discounts
            .resolve(&DiscountContext {
                customer,
                subtotal,
                line_count: order.len(),
            })
            .value;

        let invoice = Invoice {
            invoice_id: self.next_invoice_id(),
            customer,
            lines,
            subtotal,
            tax_pct,
            tax,
            discount,
            total: subtotal + tax - discount,
        };

        if let Err(error) = self.store.save(&invoice) {
            tracing::warn!(
                invoice_id = %invoice.invoice_id.0,
                %error,
                "failed to persist invoice"
            );
        }

        Ok(invoice)
    }

    fn next_invoice_id(&self) -> InvoiceId {
        let number = self.sequence.fetch_add(1, Ordering::Relaxed);
        InvoiceId(format!("INV-{number}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::cafeteria::domain::MenuItem;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryInvoices {
        saved: Mutex<Vec<Invoice>>,
    }

    impl InvoiceStore for MemoryInvoices {
        fn save(&self, invoice: &Invoice) -> Result<(), InvoiceStoreError> {
            self.saved
                .lock()
                .expect("invoice mutex poisoned")
                .push(invoice.clone());
            Ok(())
        }

        fn count(&self) -> Result<usize, InvoiceStoreError> {
            Ok(self.saved.lock().expect("invoice mutex poisoned").len())
        }
    }

    fn menu() -> Menu {
        [
            ("C1", "Veg Thali", 80),
            ("C2", "Coffee", 30),
            ("S1", "Sandwich", 60),
        ]
        .into_iter()
        .map(|(id, name, price)| MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            price: Money::rupees(price),
        })
        .collect()
    }

    fn line(item_id: &str, qty: u32) -> OrderLine {
        OrderLine {
            item_id: item_id.to_string(),
            qty,
        }
    }

    fn checkout() -> (CafeteriaCheckout<MemoryInvoices>, Arc<MemoryInvoices>) {
        let store = Arc::new(MemoryInvoices::default());
        let checkout = CafeteriaCheckout::new(menu(), CafeteriaPricing::standard(), store.clone());
        (checkout, store)
    }

    #[test]
    fn student_order_over_threshold_gets_discount() {
        let (checkout, store) = checkout();

        let invoice = checkout
            .checkout(CustomerType::Student, &[line("C1", 2), line("C2", 1)])
            .expect("checkout succeeds");

        assert_eq!(invoice.invoice_id, InvoiceId("INV-1001".to_string()));
        assert_eq!(invoice.subtotal, Money::rupees(190));
        assert_eq!(invoice.tax_pct, 5.0);
        assert_eq!(invoice.tax, Money::from_paise(950));
        assert_eq!(invoice.discount, Money::rupees(10));
        assert_eq!(invoice.total, Money::from_paise(18_950));
        assert_eq!(store.count().expect("count"), 1);
    }

    #[test]
    fn staff_multi_line_order_gets_staff_rates() {
        let (checkout, _) = checkout();

        let invoice = checkout
            .checkout(
                CustomerType::Staff,
                &[line("C1", 1), line("C2", 1), line("S1", 1)],
            )
            .expect("checkout succeeds");

        assert_eq!(invoice.subtotal, Money::rupees(170));
        assert_eq!(invoice.tax, Money::from_paise(340));
        assert_eq!(invoice.discount, Money::rupees(15));
        assert_eq!(invoice.total, Money::from_paise(15_840));
    }

    #[test]
    fn unknown_customer_type_uses_fallback_tax_and_no_discount() {
        let (checkout, _) = checkout();

        let invoice = checkout
            .checkout(CustomerType::Unknown, &[line("C2", 1)])
            .expect("checkout succeeds");

        assert_eq!(invoice.tax_pct, 8.0);
        assert_eq!(invoice.discount, Money::ZERO);
        assert_eq!(invoice.total, Money::from_paise(3_240));
    }

    #[test]
    fn unknown_menu_item_is_rejected_without_consuming_an_id() {
        let (checkout, store) = checkout();

        match checkout.checkout(CustomerType::Visitor, &[line("Z9", 1)]) {
            Err(CheckoutError::UnknownItem(id)) => assert_eq!(id, "Z9"),
            other => panic!("expected unknown item, got {other:?}"),
        }
        assert_eq!(store.count().expect("count"), 0);

        let invoice = checkout
            .checkout(CustomerType::Visitor, &[line("C2", 1)])
            .expect("checkout succeeds");
        assert_eq!(invoice.invoice_id.0, "INV-1001");
    }

    #[test]
    fn re_adding_a_menu_item_replaces_it_in_place() {
        let mut menu = menu();
        menu.add(MenuItem {
            id: "C2".to_string(),
            name: "Filter Coffee".to_string(),
            price: Money::rupees(35),
        });

        assert_eq!(menu.items().len(), 3);
        assert_eq!(menu.items()[1].name, "Filter Coffee");
    }
}
