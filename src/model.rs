mod api_error;
pub use api_error::{ApiError, ApiResult};
mod asset;
pub use asset::{Asset, ASSET_NAMES};
mod certificate;
pub use certificate::Certificate;
mod conversion;
pub use conversion::{ConversionRecord, ConvertInput, ConvertOutput};
mod currency;
pub use currency::Currency;
