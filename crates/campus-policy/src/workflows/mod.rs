pub mod cafeteria;
pub mod hostel;
pub mod onboarding;
pub mod placement;
