use chrono::{Datelike, NaiveDate, NaiveTime, TimeDelta};

use crate::clinic::Clinic;
use crate::error::ClinicError;
use crate::models::appointment::AppointmentLedger;
use crate::models::availability::Availability;
use crate::models::doctor::Doctor;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

// evening service window, same for every doctor
const WINDOW_START_HOURS: i64 = 17;
const WINDOW_END_HOURS: i64 = 20;

pub fn parse_date(raw: &str) -> Result<NaiveDate, ClinicError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| ClinicError::InvalidDateFormat)
}

fn window_bound(date: NaiveDate, hours: i64) -> String {
    (date.and_time(NaiveTime::MIN) + TimeDelta::hours(hours))
        .format("%H:%M")
        .to_string()
}

/// Computes remaining slots for an already resolved doctor and date.
///
/// Callers that go on to append must keep the ledger guard alive until the
/// append is done.
pub fn check_availability(
    doctor: &Doctor,
    ledger: &AppointmentLedger,
    date: NaiveDate,
    raw_date: &str,
) -> Result<Availability, ClinicError> {
    // Monday = 0, so 5 and 6 are Saturday and Sunday
    if date.weekday().num_days_from_monday() >= 5 {
        return Err(ClinicError::WeekendUnavailable);
    }

    let booked = ledger.count_for(doctor.id, date) as i64;

    Ok(Availability {
        doctor_id: doctor.id,
        date: raw_date.to_string(),
        start_time: window_bound(date, WINDOW_START_HOURS),
        end_time: window_bound(date, WINDOW_END_HOURS),
        slots_available: i64::from(doctor.max_patients) - booked,
    })
}

pub fn get_availability(
    clinic: &Clinic,
    doctor_id: u32,
    raw_date: Option<&str>,
) -> Result<Availability, ClinicError> {
    let raw_date = raw_date.ok_or(ClinicError::InvalidDateFormat)?;
    let date = parse_date(raw_date)?;
    let doctor = clinic.directory().get(doctor_id)?;

    let ledger = clinic.ledger();
    check_availability(doctor, &ledger, date, raw_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appointment::Appointment;
    use crate::models::doctor::DoctorDirectory;

    fn clinic() -> Clinic {
        Clinic::new(DoctorDirectory::default())
    }

    #[test]
    fn fresh_weekday_has_full_capacity() {
        let availability = get_availability(&clinic(), 1, Some("2024-06-10")).unwrap();

        assert_eq!(
            availability,
            Availability {
                doctor_id: 1,
                date: "2024-06-10".to_string(),
                start_time: "17:00".to_string(),
                end_time: "20:00".to_string(),
                slots_available: 5,
            }
        );
    }

    #[test]
    fn weekends_are_rejected_for_every_doctor() {
        let clinic = clinic();
        for doctor_id in [1, 2] {
            for date in ["2024-06-08", "2024-06-09"] {
                assert_eq!(
                    get_availability(&clinic, doctor_id, Some(date)),
                    Err(ClinicError::WeekendUnavailable)
                );
            }
        }
    }

    #[test]
    fn malformed_dates_are_rejected_before_doctor_lookup() {
        let clinic = clinic();
        for raw in ["2024/06/10", "10-06-2024", "2024-02-30", "tomorrow", ""] {
            assert_eq!(
                get_availability(&clinic, 99, Some(raw)),
                Err(ClinicError::InvalidDateFormat),
                "{raw}"
            );
        }
        assert_eq!(
            get_availability(&clinic, 1, None),
            Err(ClinicError::InvalidDateFormat)
        );
    }

    #[test]
    fn unknown_doctor_is_not_found() {
        assert_eq!(
            get_availability(&clinic(), 99, Some("2024-06-10")),
            Err(ClinicError::DoctorNotFound(99))
        );
    }

    #[test]
    fn slots_subtract_matching_appointments_only() {
        let clinic = clinic();
        let monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();
        {
            let mut ledger = clinic.ledger();
            for (doctor_id, date) in [(1, monday), (1, monday), (1, tuesday), (2, monday)] {
                ledger.append(Appointment {
                    doctor_id,
                    patient_name: Some("Alice".to_string()),
                    date,
                });
            }
        }

        let slots = |doctor_id: u32, date: &str| {
            get_availability(&clinic, doctor_id, Some(date))
                .unwrap()
                .slots_available
        };
        assert_eq!(slots(1, "2024-06-10"), 3);
        assert_eq!(slots(1, "2024-06-11"), 4);
        assert_eq!(slots(2, "2024-06-10"), 6);
        assert_eq!(slots(2, "2024-06-11"), 7);
    }

    #[test]
    fn overbooked_day_goes_negative() {
        let doctor = Doctor::new(5, "Dr. Small", 1);
        let monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mut ledger = AppointmentLedger::new();
        for patient in ["Alice", "Bob", "Carol"] {
            ledger.append(Appointment {
                doctor_id: 5,
                patient_name: Some(patient.to_string()),
                date: monday,
            });
        }

        let availability = check_availability(&doctor, &ledger, monday, "2024-06-10").unwrap();

        assert_eq!(availability.slots_available, -2);
    }
}
