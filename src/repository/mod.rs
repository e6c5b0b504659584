pub mod asset;
pub use asset::AssetRepository;
pub mod certificate;
pub use certificate::CertificateRepository;
pub mod conversion;
pub use conversion::ConversionRepository;
