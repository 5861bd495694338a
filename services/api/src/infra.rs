use campus_policy::policy::Money;
use campus_policy::workflows::cafeteria::{
    Invoice, InvoiceStore, InvoiceStoreError, Menu, MenuItem, OrderLine,
};
use campus_policy::workflows::hostel::{
    BookingId, BookingRecord, BookingRepository, BookingStoreError,
};
use campus_policy::workflows::onboarding::{StudentRecord, StudentRepository, StudentStoreError};
use campus_policy::workflows::placement::{
    EligibilityRecord, EligibilityStore, RollNumber, StoreError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryEligibilityStore {
    records: Arc<Mutex<HashMap<RollNumber, EligibilityRecord>>>,
}

impl EligibilityStore for InMemoryEligibilityStore {
    fn save(&self, record: EligibilityRecord) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("eligibility mutex poisoned");
        guard.insert(record.roll_no.clone(), record);
        Ok(())
    }

    fn fetch(&self, roll_no: &RollNumber) -> Result<Option<EligibilityRecord>, StoreError> {
        let guard = self.records.lock().expect("eligibility mutex poisoned");
        Ok(guard.get(roll_no).cloned())
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.records.lock().expect("eligibility mutex poisoned").len())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryBookingRepository {
    records: Arc<Mutex<HashMap<BookingId, BookingRecord>>>,
}

impl BookingRepository for InMemoryBookingRepository {
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

#[derive(Default, Clone)]
pub(crate) struct InMemoryInvoiceStore {
    invoices: Arc<Mutex<Vec<Invoice>>>,
}

impl InvoiceStore for InMemoryInvoiceStore {
    fn save(&self, invoice: &Invoice) -> Result<(), InvoiceStoreError> {
        self.invoices
            .lock()
            .expect("invoice mutex poisoned")
            .push(invoice.clone());
        Ok(())
    }

    fn count(&self) -> Result<usize, InvoiceStoreError> {
        Ok(self.invoices.lock().expect("invoice mutex poisoned").len())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryStudentRepository {
    records: Arc<Mutex<Vec<StudentRecord>>>,
}

impl StudentRepository for InMemoryStudentRepository {
    fn save(&self, record: StudentRecord) -> Result<(), StudentStoreError> {
        self.records
            .lock()
            .expect("student mutex poisoned")
            .push(record);
        Ok(())
    }

    fn count(&self) -> Result<usize, StudentStoreError> {
        Ok(self.records.lock().expect("student mutex poisoned").len())
    }

    fn all(&self) -> Result<Vec<StudentRecord>, StudentStoreError> {
        Ok(self.records.lock().expect("student mutex poisoned").clone())
    }
}

pub(crate) fn default_menu() -> Menu {
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

/// Parses `ITEM` or `ITEM:QTY` order arguments.
pub(crate) fn parse_order_line(raw: &str) -> Result<OrderLine, String> {
    let (item_id, qty) = match raw.trim().split_once(':') {
        Some((item_id, qty)) => {
            let qty = qty
                .trim()
                .parse::<u32>()
                .map_err(|err| format!("invalid quantity in '{raw}' ({err})"))?;
            (item_id.trim(), qty)
        }
        None => (raw.trim(), 1),
    };

    if item_id.is_empty() {
        return Err(format!("missing item id in '{raw}'"));
    }

    Ok(OrderLine {
        item_id: item_id.to_string(),
        qty,
    })
}
