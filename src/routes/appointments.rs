use crate::clinic::Clinic;
use crate::error::ClinicError;
use crate::handlers::booking::book_appointment;
use crate::models::appointment::BookingRequest;
use crate::models::availability::MessageResponse;
use actix_web::{HttpResponse, post, web};

#[post("")]
async fn book(
    clinic: web::Data<Clinic>,
    body: web::Json<BookingRequest>,
) -> Result<HttpResponse, ClinicError> {
    book_appointment(&clinic, body.into_inner())?;
    Ok(HttpResponse::Created().json(MessageResponse::new("Appointment booked successfully")))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| ClinicError::InvalidRequest(err.to_string()).into());

    cfg.app_data(json_config).service(book);
}
