use anyhow::Error;
use rocket::{
    async_trait,
    http::{ContentType, Status},
    request::Request,
    response::{self, Responder, Response},
    serde::json::{self, Json},
};
use serde::Serialize;
use std::io::Cursor;
use tracing::error;

pub type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing)]
    pub error: Option<Error>,
}

impl ApiError {
    /// Response carrying the source error chain, which is also logged.
    pub fn new(code: u16, error: Error) -> ApiError {
        ApiError {
            code,
            message: format!("{:#}", error),
            error: Some(error),
        }
    }

    pub fn custom(code: u16, message: &str) -> ApiError {
        ApiError {
            code,
            message: message.to_string(),
            error: None,
        }
    }

    pub fn context(code: u16, message: &str, error: Error) -> ApiError {
        ApiError {
            code,
            message: format!("{}: {:#}", message, error),
            error: Some(error),
        }
    }

    pub fn internal(error: Error) -> ApiError {
        ApiError::new(Status::InternalServerError.code, error)
    }

    pub fn bad_request(message: &str) -> ApiError {
        ApiError::custom(Status::BadRequest.code, message)
    }

    pub fn not_found(message: &str) -> ApiError {
        ApiError::custom(Status::NotFound.code, message)
    }
}

#[async_trait]
impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        if let Some(error) = &self.error {
            error!(code = self.code, %error, "Error from controller");
        }

        let body = json::to_string(&self).map_err(|_| Status::InternalServerError)?;

        Response::build()
            .header(ContentType::JSON)
            .status(Status::new(self.code))
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

impl From<Status> for ApiError {
    fn from(s: Status) -> Self {
        ApiError {
            code: s.code,
            message: s.reason().unwrap_or("").to_string(),
            error: None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::ApiError;
    use anyhow::anyhow;
    use rocket::http::Status;

    #[test]
    fn context() {
        let e = ApiError::context(500, "Conversion failed", anyhow!("timed out"));
        assert_eq!("Conversion failed: timed out", e.message);
        assert!(e.error.is_some());
    }

    #[test]
    fn from_status() {
        let e: ApiError = Status::NotFound.into();
        assert_eq!(404, e.code);
        assert_eq!("Not Found", e.message);
    }
}
