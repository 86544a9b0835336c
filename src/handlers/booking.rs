use tracing::info;

use crate::clinic::Clinic;
use crate::error::ClinicError;
use crate::handlers::availability::{check_availability, parse_date};
use crate::models::appointment::{Appointment, BookingRequest};

/// Validates a booking and appends it to the ledger if the doctor has room.
///
/// The availability check and the append share one ledger guard, so two
/// concurrent requests cannot both take the last slot.
pub fn book_appointment(
    clinic: &Clinic,
    request: BookingRequest,
) -> Result<Appointment, ClinicError> {
    let date = parse_date(&request.date)?;
    let doctor = clinic.directory().resolve(request.doctor_id)?;

    let mut ledger = clinic.ledger();
    let availability = check_availability(doctor, &ledger, date, &request.date)?;
    if availability.slots_available <= 0 {
        return Err(ClinicError::NoSlotsAvailable);
    }

    let appointment = Appointment {
        doctor_id: doctor.id,
        patient_name: request.patient_name,
        date,
    };
    ledger.append(appointment.clone());
    let ledger_size = ledger.len();
    drop(ledger);

    info!(
        doctor_id = appointment.doctor_id,
        date = %appointment.date,
        slots_left = availability.slots_available - 1,
        ledger_size,
        "Appointment booked"
    );

    Ok(appointment)
}
