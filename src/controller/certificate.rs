use crate::{
    model::{ApiError, ApiResult, Certificate},
    provider::Converter,
    repository::CertificateRepository,
    service::certificate,
};
use rocket::{
    delete, get, post, put,
    serde::json::{self, Json},
    State,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteOutput {
    pub message: String,
}

fn decode(input: Result<Json<Certificate>, json::Error<'_>>) -> Result<Certificate, ApiError> {
    input.map(Json::into_inner).map_err(|e| {
        warn!(?e, "Invalid certificate");
        ApiError::bad_request(&e.to_string())
    })
}

#[post("/createcert", data = "<input>")]
pub async fn create(
    input: Result<Json<Certificate>, json::Error<'_>>,
    converter: &State<Box<dyn Converter>>,
    repo: &State<CertificateRepository>,
) -> ApiResult<Certificate> {
    let cert = certificate::create(decode(input)?, converter.inner().as_ref(), repo).await?;
    Ok(Json(cert))
}

#[get("/getallcerts")]
pub fn list(repo: &State<CertificateRepository>) -> ApiResult<Vec<Certificate>> {
    Ok(Json(certificate::list(repo)?))
}

#[get("/getcertbyid/<id>")]
pub fn get_by_id(id: i64, repo: &State<CertificateRepository>) -> ApiResult<Certificate> {
    Ok(Json(certificate::get(id, repo)?))
}

#[put("/updatecertbyid/<id>", data = "<input>")]
pub fn update_by_id(
    id: i64,
    input: Result<Json<Certificate>, json::Error<'_>>,
    repo: &State<CertificateRepository>,
) -> ApiResult<Certificate> {
    Ok(Json(certificate::update(id, decode(input)?, repo)?))
}

#[delete("/deletecertbyid/<id>")]
pub fn delete_by_id(id: i64, repo: &State<CertificateRepository>) -> ApiResult<DeleteOutput> {
    certificate::delete(id, repo)?;
    Ok(Json(DeleteOutput {
        message: format!("Certificate with id {} deleted successfully", id),
    }))
}
