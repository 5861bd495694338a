use crate::infra::{
    default_menu, parse_order_line, InMemoryBookingRepository, InMemoryEligibilityStore,
    InMemoryInvoiceStore, InMemoryStudentRepository,
};
use campus_policy::config::PolicyConfig;
use campus_policy::error::AppError;
use campus_policy::workflows::cafeteria::{
    CafeteriaCheckout, CafeteriaPricing, CustomerType, Invoice, OrderLine,
};
use campus_policy::workflows::hostel::{
    AddOn, BookingReceipt, BookingRequest, HostelBookingService, RoomType,
};
use campus_policy::workflows::onboarding::OnboardingService;
use campus_policy::workflows::placement::{
    DisciplinaryFlag, EligibilityOutcome, EligibilityService, RollNumber, RosterImporter,
    StudentProfile,
};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct PlacementDemoArgs {
    /// Roster CSV (roll_no,name,cgpa,attendance,credits,disciplinary). Defaults to a sample student.
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct HostelDemoArgs {
    /// Room category (SINGLE, DOUBLE, TRIPLE, DELUXE)
    #[arg(long, default_value = "DOUBLE")]
    pub(crate) room: String,
    /// Add-on service; repeat for several (MESS, LAUNDRY, GYM)
    #[arg(long)]
    pub(crate) add_on: Vec<String>,
}

#[derive(Args, Debug)]
pub(crate) struct CafeteriaDemoArgs {
    /// Customer category (STUDENT, STAFF, VISITOR)
    #[arg(long, default_value = "STUDENT")]
    pub(crate) customer: String,
    /// Order line as ITEM or ITEM:QTY; repeat for several
    #[arg(long, value_parser = parse_order_line)]
    pub(crate) item: Vec<OrderLine>,
}

#[derive(Args, Debug)]
pub(crate) struct OnboardingDemoArgs {
    /// Raw registration input
    #[arg(
        long,
        default_value = "name=Riya;email=riya@sst.edu;phone=9876543210;program=CSE"
    )]
    pub(crate) raw: String,
}

pub(crate) fn run_placement_demo(args: PlacementDemoArgs) -> Result<(), AppError> {
    let policy = PolicyConfig::from_env()?;
    let profiles = match args.roster {
        Some(path) => RosterImporter::from_path(path)?,
        None => vec![sample_student()],
    };

    println!("Placement eligibility");
    let store = Arc::new(InMemoryEligibilityStore::default());
    let service = EligibilityService::new(store, &policy.eligibility);

    for profile in &profiles {
        let outcome = service.evaluate(profile);
        render_eligibility(profile, &outcome);
    }

    match service.recorded() {
        Ok(count) => println!("Saved {count} eligibility decision(s)"),
        Err(err) => println!("Eligibility store unavailable: {err}"),
    }

    Ok(())
}

pub(crate) fn run_hostel_demo(args: HostelDemoArgs) -> Result<(), AppError> {
    let policy = PolicyConfig::from_env()?;
    let request = BookingRequest {
        room_type: RoomType::parse(&args.room),
        add_ons: args.add_on.iter().map(|raw| AddOn::parse(raw)).collect(),
    };

    println!("Hostel fee calculator");
    let repository = Arc::new(InMemoryBookingRepository::default());
    let service = HostelBookingService::new(repository, &policy.tariff);
    let receipt = service.book(request);
    render_receipt(&receipt);

    Ok(())
}

pub(crate) fn run_cafeteria_demo(args: CafeteriaDemoArgs) -> Result<(), AppError> {
    let customer = CustomerType::parse(&args.customer);
    let order = if args.item.is_empty() {
        vec![
            OrderLine {
                item_id: "C1".to_string(),
                qty: 2,
            },
            OrderLine {
                item_id: "C2".to_string(),
                qty: 1,
            },
        ]
    } else {
        args.item
    };

    println!("Cafeteria checkout");
    let store = Arc::new(InMemoryInvoiceStore::default());
    let checkout = CafeteriaCheckout::new(default_menu(), CafeteriaPricing::standard(), store);

    match checkout.checkout(customer, &order) {
        Ok(invoice) => render_invoice(&invoice),
        Err(err) => println!("  Checkout rejected: {err}"),
    }

    Ok(())
}

pub(crate) fn run_onboarding_demo(args: OnboardingDemoArgs) -> Result<(), AppError> {
    let policy = PolicyConfig::from_env()?;

    println!("Student onboarding");
    println!("  Input: {}", args.raw);
    let repository = Arc::new(InMemoryStudentRepository::default());
    let service = OnboardingService::new(repository, policy.intake_year);

    match service.register(&args.raw) {
        Ok(record) => {
            println!("  Registered {} ({})", record.id.0, record.name);
            println!("  Email: {} | Phone: {} | Program: {}", record.email, record.phone, record.program);
        }
        Err(err) => println!("  Registration rejected: {err}"),
    }

    if let Ok(roster) = service.roster() {
        println!("  Students on record: {}", roster.len());
    }

    Ok(())
}

fn sample_student() -> StudentProfile {
    StudentProfile {
        roll_no: RollNumber("23BCS1001".to_string()),
        name: "Ayaan".to_string(),
        cgpa: 8.10,
        attendance_pct: 72,
        earned_credits: 18,
        disciplinary: DisciplinaryFlag::None,
    }
}

fn render_eligibility(profile: &StudentProfile, outcome: &EligibilityOutcome) {
    println!(
        "- {} ({}) CGPA {:.2} | attendance {}% | credits {}",
        profile.name,
        profile.roll_no.0,
        profile.cgpa,
        profile.attendance_pct,
        profile.earned_credits
    );
    println!("  Result: {}", outcome.status.label());
    for reason in &outcome.reasons {
        println!("    - {reason}");
    }
}

fn render_receipt(receipt: &BookingReceipt) {
    let quote = &receipt.quote;
    println!("- Booking {}", receipt.booking_id.0);
    match &quote.room.matched {
        Some(_) => println!("  Room ({}): {}", quote.room_type, quote.room.value),
        None => println!(
            "  Room ({}): {} (fallback rate)",
            quote.room_type, quote.room.value
        ),
    }
    for charge in &quote.add_ons {
        match &charge.matched {
            Some(_) => println!("  Add-on {}: {}", charge.add_on, charge.amount),
            None => println!("  Add-on {}: {} (not priced)", charge.add_on, charge.amount),
        }
    }
    println!("  Monthly: {}", quote.monthly);
    println!("  Deposit: {}", quote.deposit);
    println!("  Due at booking: {}", quote.due_at_booking());
}

fn render_invoice(invoice: &Invoice) {
    println!("- Invoice {} ({})", invoice.invoice_id.0, invoice.customer);
    for line in &invoice.lines {
        println!(
            "  {} x{} @ {} = {}",
            line.name, line.qty, line.unit_price, line.line_total
        );
    }
    println!("  Subtotal: {}", invoice.subtotal);
    println!("  Tax ({:.0}%): {}", invoice.tax_pct, invoice.tax);
    println!("  Discount: -{}", invoice.discount);
    println!("  Total: {}", invoice.total);
}
