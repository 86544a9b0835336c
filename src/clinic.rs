use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::appointment::AppointmentLedger;
use crate::models::doctor::DoctorDirectory;

/// Shared service state: the doctor directory plus the appointment ledger.
///
/// Built once at startup and handed to actix as `web::Data<Clinic>`. The
/// directory is immutable; every ledger read or check-then-append goes through
/// [`Clinic::ledger`], which is the single critical section for bookings.
#[derive(Debug, Default)]
pub struct Clinic {
    directory: DoctorDirectory,
    ledger: Mutex<AppointmentLedger>,
}

impl Clinic {
    pub fn new(directory: DoctorDirectory) -> Self {
        Clinic {
            directory,
            ledger: Mutex::new(AppointmentLedger::new()),
        }
    }

    pub fn directory(&self) -> &DoctorDirectory {
        &self.directory
    }

    /// Locks the ledger. Must not be held across an `.await`.
    pub fn ledger(&self) -> MutexGuard<'_, AppointmentLedger> {
        // the ledger is append-only, so a panicked holder cannot leave it half-written
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
