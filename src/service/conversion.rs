use crate::{
    model::{ConversionRecord, ConvertOutput},
    provider::{RateError, RateProvider, BASE_CURRENCY},
    repository::ConversionRepository,
    service::CurrencyTable,
};
use anyhow::Result;
use chrono::Utc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("unsupported country: {0}")]
    UnsupportedCountry(String),
    #[error(transparent)]
    Rate(#[from] RateError),
}

/// Converts `amount` dollars into the currency of `country_code` and logs the
/// conversion. A failed insert is logged and otherwise ignored.
///
/// The base currency converts at 1 without asking `rates`; every other
/// currency fetches a fresh rate per call.
pub async fn convert(
    amount: f64,
    country_code: &str,
    currencies: &CurrencyTable,
    rates: &dyn RateProvider,
    repo: &ConversionRepository,
) -> Result<ConvertOutput, ConversionError> {
    let country_code = country_code.to_uppercase();
    let currency = currencies.lookup(&country_code)?;

    let rate = if currency.code == BASE_CURRENCY {
        1.0
    } else {
        rates.rate(&currency.code).await?
    };

    let converted_amount = amount * rate;
    info!(%country_code, currency = %currency.code, rate, amount, converted_amount, "Converted");

    let record = ConversionRecord {
        original_amount: amount,
        converted_amount,
        country_code: country_code.clone(),
        currency_code: currency.code.clone(),
        created_at: Utc::now(),
    };

    if let Err(e) = repo.insert(&record) {
        error!(%e, %country_code, "Failed to save conversion");
    }

    Ok(ConvertOutput {
        original_amount: amount,
        converted_amount,
        currency_code: currency.code.clone(),
        currency_name: currency.name.clone(),
    })
}

pub fn history(repo: &ConversionRepository) -> Result<Vec<ConversionRecord>> {
    repo.select_all()
}

#[cfg(test)]
mod test {
    use super::{convert, ConversionError};
    use crate::{
        provider::RateError,
        repository::ConversionRepository,
        service::CurrencyTable,
        test::{pool, FixedRates},
    };

    fn rates() -> FixedRates {
        FixedRates::new(&[("INR", 83.25), ("GBP", 0.79), ("JPY", 155.5)])
    }

    #[rocket::async_test]
    async fn convert_lowercase_country() {
        let repo = ConversionRepository::new(pool());
        let res = convert(10.0, "in", &CurrencyTable::default(), &rates(), &repo)
            .await
            .unwrap();
        assert_eq!(10.0, res.original_amount);
        assert!((res.converted_amount - 832.5).abs() < 1e-9);
        assert_eq!("INR", res.currency_code);
        assert_eq!("Indian Rupee", res.currency_name);

        let log = repo.select_all().unwrap();
        assert_eq!(1, log.len());
        assert_eq!("IN", log[0].country_code);
        assert_eq!("INR", log[0].currency_code);
    }

    #[rocket::async_test]
    async fn convert_is_linear() {
        let repo = ConversionRepository::new(pool());
        let table = CurrencyTable::default();
        for country in &["IN", "GB", "JP", "US"] {
            for amount in &[0.0, 1.0, 17.3, 2500.75] {
                let single = convert(*amount, country, &table, &rates(), &repo).await.unwrap();
                let double = convert(2.0 * amount, country, &table, &rates(), &repo)
                    .await
                    .unwrap();
                let expected = 2.0 * single.converted_amount;
                assert!((double.converted_amount - expected).abs() <= 1e-9 * expected.abs().max(1.0));
            }
        }
    }

    #[rocket::async_test]
    async fn convert_base_currency() {
        let repo = ConversionRepository::new(pool());
        let res = convert(42.0, "us", &CurrencyTable::default(), &FixedRates::new(&[]), &repo)
            .await
            .unwrap();
        assert_eq!(42.0, res.converted_amount);
        assert_eq!("USD", res.currency_code);
    }

    #[rocket::async_test]
    async fn convert_unsupported_country() {
        let repo = ConversionRepository::new(pool());
        let err = convert(1.0, "fr", &CurrencyTable::default(), &rates(), &repo)
            .await
            .unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedCountry(ref c) if c == "FR"));
        assert!(repo.select_all().unwrap().is_empty());
    }

    #[rocket::async_test]
    async fn convert_rate_unavailable() {
        let repo = ConversionRepository::new(pool());
        let err = convert(1.0, "EU", &CurrencyTable::default(), &rates(), &repo)
            .await
            .unwrap_err();
        assert!(matches!(err, ConversionError::Rate(RateError::Unavailable(_))));
        assert_eq!("could not find exchange rate for EUR", err.to_string());
        assert!(repo.select_all().unwrap().is_empty());
    }

    #[rocket::async_test]
    async fn convert_when_log_fails() {
        let pool = pool();
        pool.get().unwrap().execute_batch("DROP TABLE conversions").unwrap();
        let repo = ConversionRepository::new(pool);
        let res = convert(2.0, "GB", &CurrencyTable::default(), &rates(), &repo)
            .await
            .unwrap();
        assert!((res.converted_amount - 1.58).abs() < 1e-9);
    }
}
