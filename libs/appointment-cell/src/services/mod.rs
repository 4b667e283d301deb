pub mod appointment;
pub mod booking;
pub mod conflict;

pub use appointment::AppointmentService;
pub use booking::AppointmentBookingService;
pub use conflict::ConflictDetectionService;
