use crate::{
    conf::RatesConf,
    provider::{RateError, RateProvider, BASE_CURRENCY},
};
use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;
use std::{collections::HashMap, time::Duration};
use tracing::info;

/// Rates from the Frankfurter API (`/latest?from=USD&to=<CODE>`).
pub struct Frankfurter {
    conf: RatesConf,
    client: Client,
}

#[derive(Deserialize)]
struct LatestRates {
    rates: HashMap<String, f64>,
}

impl Frankfurter {
    pub fn new(conf: RatesConf) -> Result<Frankfurter> {
        let mut builder = Client::builder();

        if let Some(secs) = conf.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Frankfurter {
            conf,
            client: builder.build()?,
        })
    }

    fn url(&self, quote: &str) -> String {
        format!(
            "{}/latest?from={}&to={}",
            self.conf.url.trim_end_matches('/'),
            BASE_CURRENCY,
            quote
        )
    }
}

fn pick(latest: LatestRates, quote: &str) -> Result<f64, RateError> {
    latest
        .rates
        .get(quote)
        .copied()
        .ok_or_else(|| RateError::Unavailable(quote.to_string()))
}

#[rocket::async_trait]
impl RateProvider for Frankfurter {
    fn name(&self) -> String {
        "frankfurter".into()
    }

    async fn rate(&self, quote: &str) -> Result<f64, RateError> {
        let url = self.url(quote);
        info!(provider = %self.name(), %url, "Fetching exchange rate");
        let latest = self.client.get(&url).send().await?.json::<LatestRates>().await?;
        pick(latest, quote)
    }
}
