pub mod asset;
pub mod certificate;
pub mod conversion;
pub mod home;

use crate::{
    model::ApiError,
    service::{CertificateError, ConversionError},
};
use rocket::http::Status;

impl From<ConversionError> for ApiError {
    fn from(e: ConversionError) -> Self {
        match e {
            ConversionError::UnsupportedCountry(_) => ApiError::bad_request("Unsupported country code"),
            ConversionError::Rate(e) => {
                ApiError::context(Status::InternalServerError.code, "Conversion failed", e.into())
            }
        }
    }
}

impl From<CertificateError> for ApiError {
    fn from(e: CertificateError) -> Self {
        match e {
            CertificateError::NotFound(_) => ApiError::not_found("Certificate not found"),
            CertificateError::Conversion(e) | CertificateError::Storage(e) => ApiError::internal(e),
        }
    }
}
