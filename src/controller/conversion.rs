use crate::{
    model::{ApiError, ApiResult, ConversionRecord, ConvertInput, ConvertOutput},
    provider::RateProvider,
    repository::ConversionRepository,
    service::{conversion, CurrencyTable},
};
use rocket::{
    get, post,
    serde::json::{self, Json},
    State,
};
use tracing::warn;

#[post("/api/currency", data = "<input>")]
pub async fn convert(
    input: Result<Json<ConvertInput>, json::Error<'_>>,
    currencies: &State<CurrencyTable>,
    rates: &State<Box<dyn RateProvider>>,
    repo: &State<ConversionRepository>,
) -> ApiResult<ConvertOutput> {
    let input = input.map_err(|e| {
        warn!(?e, "Invalid conversion request");
        ApiError::bad_request("Invalid request")
    })?;

    let output = conversion::convert(
        input.amount,
        &input.country_code,
        currencies,
        rates.inner().as_ref(),
        repo,
    )
    .await?;

    Ok(Json(output))
}

#[get("/api/conversions")]
pub fn history(repo: &State<ConversionRepository>) -> ApiResult<Vec<ConversionRecord>> {
    conversion::history(repo)
        .map(Json)
        .map_err(ApiError::internal)
}
