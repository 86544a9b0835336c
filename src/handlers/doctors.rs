use crate::clinic::Clinic;
use crate::error::ClinicError;
use crate::models::doctor::Doctor;

pub fn list_doctors(clinic: &Clinic) -> &[Doctor] {
    clinic.directory().list()
}

pub fn get_doctor(clinic: &Clinic, doctor_id: u32) -> Result<&Doctor, ClinicError> {
    clinic.directory().get(doctor_id)
}
