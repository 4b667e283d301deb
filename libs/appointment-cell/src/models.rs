// libs/appointment-cell/src/models.rs

/// Result of a create or edit that passed input handling. A clash on
/// `(date, patientId, doctor)` is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome<T> {
    Accepted(T),
    AlreadyBooked { date: String },
}

impl<T> BookingOutcome<T> {
    pub fn is_booked(&self) -> bool {
        matches!(self, BookingOutcome::AlreadyBooked { .. })
    }
}

pub fn already_booked_message(date: &str) -> String {
    format!("You already have an appointment on {}", date)
}
