use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub doctor_id: u32,
    pub patient_name: Option<String>,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingRequest {
    /// Signed and wide so that out-of-range ids reach the directory lookup.
    pub doctor_id: i64,
    /// Free text; absent or null is still bookable.
    #[serde(default)]
    pub patient_name: Option<String>,
    pub date: String,
}

/// Append-only record of every booking made since startup.
#[derive(Debug, Default)]
pub struct AppointmentLedger {
    entries: Vec<Appointment>,
}

impl AppointmentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, appointment: Appointment) {
        self.entries.push(appointment);
    }

    pub fn count_for(&self, doctor_id: u32, date: NaiveDate) -> usize {
        self.entries
            .iter()
            .filter(|apt| apt.doctor_id == doctor_id && apt.date == date)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
