use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertInput {
    pub amount: f64,
    pub country_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertOutput {
    pub original_amount: f64,
    pub converted_amount: f64,
    pub currency_code: String,
    pub currency_name: String,
}

/// One row of the append-only conversion log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub original_amount: f64,
    pub converted_amount: f64,
    pub country_code: String,
    pub currency_code: String,
    pub created_at: DateTime<Utc>,
}
