use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::warn;

use crate::models::availability::MessageResponse;

/// Rejections surfaced to API callers. The `Display` text is the wire message.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClinicError {
    #[error("Invalid date format")]
    InvalidDateFormat,

    #[error("Doctor not found")]
    DoctorNotFound(i64),

    #[error("Doctor not available on weekends")]
    WeekendUnavailable,

    #[error("No available slots for the selected date")]
    NoSlotsAvailable,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClinicError {
    pub fn error_type(&self) -> &'static str {
        match self {
            ClinicError::InvalidDateFormat => "invalid_date_format",
            ClinicError::DoctorNotFound(_) => "doctor_not_found",
            ClinicError::WeekendUnavailable => "weekend_unavailable",
            ClinicError::NoSlotsAvailable => "no_slots_available",
            ClinicError::InvalidRequest(_) => "invalid_request",
        }
    }
}

impl ResponseError for ClinicError {
    fn status_code(&self) -> StatusCode {
        match self {
            ClinicError::DoctorNotFound(_) => StatusCode::NOT_FOUND,
            ClinicError::InvalidDateFormat
            | ClinicError::WeekendUnavailable
            | ClinicError::NoSlotsAvailable
            | ClinicError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_type = self.error_type();
        match self {
            ClinicError::DoctorNotFound(doctor_id) => {
                warn!(doctor_id, error_type, "Doctor not found");
            }
            ClinicError::InvalidRequest(details) => {
                warn!(error_type, details = %details, "Invalid request");
            }
            _ => warn!(error_type, "Request rejected"),
        }

        HttpResponse::build(self.status_code()).json(MessageResponse::new(self.to_string()))
    }
}
