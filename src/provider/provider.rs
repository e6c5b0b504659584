use thiserror::Error;

/// Every rate is quoted against this currency.
pub const BASE_CURRENCY: &str = "USD";

#[derive(Debug, Error)]
pub enum RateError {
    #[error("could not find exchange rate for {0}")]
    Unavailable(String),
    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

#[rocket::async_trait]
pub trait RateProvider: Send + Sync {
    fn name(&self) -> String;

    /// Price of one [`BASE_CURRENCY`] unit in `quote`.
    async fn rate(&self, quote: &str) -> Result<f64, RateError>;
}
