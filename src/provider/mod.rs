mod provider;
pub use provider::{RateError, RateProvider, BASE_CURRENCY};
mod frankfurter;
pub use frankfurter::Frankfurter;
mod converter;
pub use converter::{Converter, ConverterClient};
