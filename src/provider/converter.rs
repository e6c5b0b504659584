use crate::{
    conf::CertsConf,
    model::{ConvertInput, ConvertOutput},
};
use anyhow::{bail, Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::info;

/// Client side of the conversion service, as seen by the certificate service.
#[rocket::async_trait]
pub trait Converter: Send + Sync {
    async fn convert(&self, input: &ConvertInput) -> Result<ConvertOutput>;
}

pub struct ConverterClient {
    url: String,
    client: Client,
}

impl ConverterClient {
    pub fn new(conf: &CertsConf) -> Result<ConverterClient> {
        let mut builder = Client::builder().danger_accept_invalid_certs(conf.accept_invalid_certs);

        if let Some(secs) = conf.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(ConverterClient {
            url: format!("{}/api/currency", conf.converter_url.trim_end_matches('/')),
            client: builder.build()?,
        })
    }
}

#[rocket::async_trait]
impl Converter for ConverterClient {
    async fn convert(&self, input: &ConvertInput) -> Result<ConvertOutput> {
        info!(url = %self.url, amount = input.amount, country_code = %input.country_code, "Calling currency converter");

        let res = self
            .client
            .post(&self.url)
            .json(input)
            .send()
            .await
            .context("Failed to call currency API")?;

        let status = res.status();

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            bail!("Currency API returned {}: {}", status, body.trim());
        }

        res.json::<ConvertOutput>()
            .await
            .context("Failed to decode currency API response")
    }
}

#[cfg(test)]
mod test {
    use super::{Converter, ConverterClient};
    use crate::{conf::Conf, model::ConvertInput};

    #[rocket::async_test]
    async fn convert_unreachable() {
        let mut conf = Conf::builtin().certs;
        conf.converter_url = "http://127.0.0.1:1/".into();
        conf.timeout_secs = Some(2);
        let client = ConverterClient::new(&conf).unwrap();
        assert_eq!("http://127.0.0.1:1/api/currency", client.url);

        let input = ConvertInput {
            amount: 100.0,
            country_code: "US".into(),
        };
        let err = client.convert(&input).await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to call currency API"));
    }
}
