pub mod appointment;
pub mod doctor;
pub mod error;
pub mod slot;

pub use appointment::{
    Appointment, AppointmentChanges, AppointmentDetails, AppointmentRequest, BookingKey,
    DEFAULT_APPOINTMENT_STATUS,
};
pub use doctor::{CreateDoctorRequest, Doctor, DoctorSummary};
pub use error::AppError;
pub use slot::{Slot, SlotQuery, SlotUpsertRequest};
