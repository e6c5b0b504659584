use crate::{
    model::{Certificate, ConvertInput},
    provider::Converter,
    repository::CertificateRepository,
};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("Certificate not found")]
    NotFound(i64),
    #[error("{0:#}")]
    Conversion(anyhow::Error),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Converts the premium into the certificate country's currency, then
/// stores the certificate. Nothing is stored if the conversion fails.
pub async fn create(
    mut cert: Certificate,
    converter: &dyn Converter,
    repo: &CertificateRepository,
) -> Result<Certificate, CertificateError> {
    let input = ConvertInput {
        amount: cert.premium_amount,
        country_code: cert.country.to_uppercase(),
    };

    let converted = converter
        .convert(&input)
        .await
        .map_err(CertificateError::Conversion)?;

    cert.premium_amount = converted.converted_amount;
    cert.id = repo.insert(&cert)?;
    info!(id = cert.id, premium = cert.premium_amount, currency = %converted.currency_code, "Created certificate");
    Ok(cert)
}

pub fn list(repo: &CertificateRepository) -> Result<Vec<Certificate>, CertificateError> {
    Ok(repo.select_all()?)
}

pub fn get(id: i64, repo: &CertificateRepository) -> Result<Certificate, CertificateError> {
    repo.select_by_id(id)?.ok_or(CertificateError::NotFound(id))
}

/// Full replace. The premium is stored as given, without conversion.
pub fn update(
    id: i64,
    mut cert: Certificate,
    repo: &CertificateRepository,
) -> Result<Certificate, CertificateError> {
    if repo.update(id, &cert)? == 0 {
        return Err(CertificateError::NotFound(id));
    }

    cert.id = id;
    Ok(cert)
}

pub fn delete(id: i64, repo: &CertificateRepository) -> Result<(), CertificateError> {
    match repo.delete(id)? {
        0 => Err(CertificateError::NotFound(id)),
        _ => {
            info!(id, "Deleted certificate");
            Ok(())
        }
    }
}
