use crate::clinic::Clinic;
use crate::error::ClinicError;
use crate::handlers::availability::get_availability;
use crate::handlers::doctors::{get_doctor, list_doctors};
use crate::models::availability::{AvailabilityQuery, MessageResponse};
use actix_web::{HttpResponse, Responder, error, get, web};

#[get("")]
async fn doctors(clinic: web::Data<Clinic>) -> impl Responder {
    HttpResponse::Ok().json(list_doctors(&clinic))
}

#[get("/{doctor_id}")]
async fn doctor(
    clinic: web::Data<Clinic>,
    path: web::Path<u32>,
) -> Result<HttpResponse, ClinicError> {
    let doctor = get_doctor(&clinic, path.into_inner())?;
    Ok(HttpResponse::Ok().json(doctor))
}

#[get("/{doctor_id}/availability")]
async fn availability(
    clinic: web::Data<Clinic>,
    path: web::Path<u32>,
    query: web::Query<AvailabilityQuery>,
) -> Result<HttpResponse, ClinicError> {
    let availability = get_availability(&clinic, path.into_inner(), query.date.as_deref())?;
    Ok(HttpResponse::Ok().json(availability))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    // a non-numeric id can never name a doctor
    let path_config = web::PathConfig::default().error_handler(|err, _req| {
        error::InternalError::from_response(
            err,
            HttpResponse::NotFound().json(MessageResponse::new("Doctor not found")),
        )
        .into()
    });

    cfg.app_data(path_config)
        .service(doctors)
        .service(availability)
        .service(doctor);
}
