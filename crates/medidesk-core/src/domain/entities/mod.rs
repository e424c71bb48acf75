//! Domain entities.

mod appointment;
mod doctor;
mod patient;
mod prescription;

pub use appointment::Appointment;
pub use doctor::Doctor;
pub use patient::Patient;
pub use prescription::Prescription;
