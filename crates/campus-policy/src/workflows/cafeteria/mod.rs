//! Cafeteria checkout: tax and discount each resolved through a first-match strategy table.

pub mod checkout;
pub mod domain;
pub mod pricing;

pub use checkout::{
    CafeteriaCheckout, CheckoutError, Invoice, InvoiceId, InvoiceLine, InvoiceStore,
    InvoiceStoreError,
};
pub use domain::{CustomerType, Menu, MenuItem, OrderLine};
pub use pricing::{CafeteriaPricing, DiscountContext, StaffMultiLineDiscount, StudentSpendDiscount};
