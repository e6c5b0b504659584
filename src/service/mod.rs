pub mod asset;
pub mod certificate;
pub use certificate::CertificateError;
pub mod conversion;
pub use conversion::ConversionError;
pub mod currency;
pub use currency::CurrencyTable;
